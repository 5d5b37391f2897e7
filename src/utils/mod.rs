pub mod db;
pub mod password;

#[cfg(test)]
pub mod test_utils;
