mod items;

pub use items::ItemsView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
