mod auth;
mod health_check;
mod identity;
mod test_utils;
