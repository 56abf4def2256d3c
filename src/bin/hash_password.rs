//! A utility for generating the bcrypt hash that the server expects in the
//! `PASSWORD_HASH` environment variable.

use std::{io, process::exit};

use bcrypt::DEFAULT_COST;

fn main() {
    let password_hash = match read_password_hash() {
        Some(password_hash) => password_hash,
        None => return,
    };

    println!("{password_hash}");
}

fn read_password_hash() -> Option<String> {
    loop {
        let first_password = match rpassword::prompt_password("Enter a password: ") {
            Ok(string) => string,
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                return None;
            }
            Err(error) => {
                print_error(format!("Could not read password from stdin: {error}"));
                return None;
            }
        };

        if first_password.is_empty() {
            print_error("The password must not be empty, try again.");
            continue;
        }

        let second_password = match rpassword::prompt_password("Enter the same password again: ") {
            Ok(string) => string,
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => {
                return None;
            }
            Err(error) => {
                print_error(format!("Could not read password from stdin: {error}"));
                return None;
            }
        };

        if first_password != second_password {
            print_error("Passwords must match, try again.");
            continue;
        }

        match bcrypt::hash(&first_password, DEFAULT_COST) {
            Ok(password_hash) => return Some(password_hash),
            Err(error) => {
                print_error(format!("Could not hash password: {error}"));
                exit(1);
            }
        }
    }
}

fn print_error(error: impl ToString) {
    eprintln!("\x1b[31;1m{}\x1b[0m", error.to_string())
}
