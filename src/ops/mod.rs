pub mod task_item;
pub mod task_store;

#[cfg(test)]
pub(crate) mod test_helpers;
