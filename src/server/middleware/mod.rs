pub mod auth;
pub mod extract;
pub mod policy;

#[cfg(test)]
mod test;
