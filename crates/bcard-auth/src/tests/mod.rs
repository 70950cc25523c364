mod bearer;
mod password;
mod policy;
