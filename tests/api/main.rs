mod admin_auth;
mod emails;
mod health_check;
mod stats;
mod storage;
