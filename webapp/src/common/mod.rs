pub mod platform;
pub mod probe;
pub mod storage;
pub mod style;

#[cfg(test)]
pub mod testing;
