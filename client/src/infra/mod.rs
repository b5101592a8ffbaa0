pub mod http;
pub mod materials;
pub mod processing;
pub mod projects;
pub mod tags;

#[cfg(test)]
pub mod testutil;
