mod inspection;
mod user;
