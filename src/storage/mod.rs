pub mod interface;
pub mod sqlite;
#[cfg(test)]
pub mod tests;
