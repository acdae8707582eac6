mod delete_account;
mod health;
mod helpers;
mod school_directory;
