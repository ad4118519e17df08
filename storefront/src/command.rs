//! Text command parsing
//!
//! Each input line maps to one [`Command`]; the session applies it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const USAGE: &str = "\
Commands:
  products [category]   list products (category \"all\" lists everything)
  categories            list categories
  add <id> [qty]        add a product to the cart
  remove <id>           remove a product from the cart
  qty <id> <n>          set quantity (0 or less removes)
  inc <id> | dec <id>   one more / one less
  cart                  show the cart
  clear                 empty the cart
  checkout              place the order
  about | contact       other sections
  help                  this text
  quit                  leave";

/// Site sections that are not built yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Contact,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::About => write!(f, "about"),
            Section::Contact => write!(f, "contact"),
        }
    }
}

/// User command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Products { category: Option<String> },
    Categories,
    Add { product_id: String, quantity: u32 },
    Remove { product_id: String },
    SetQuantity { product_id: String, quantity: i64 },
    Increase { product_id: String },
    Decrease { product_id: String },
    ShowCart,
    Clear,
    Checkout,
    Section(Section),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing {argument} for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Not a valid number: {0}")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(name) = parts.next() else {
            return Err(CommandError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "products" | "list" => Command::Products {
                category: parts.next().map(str::to_string),
            },
            "categories" => Command::Categories,
            "add" => {
                let product_id = require(parts.next(), "add", "product id")?;
                let quantity = match parts.next() {
                    Some(q) => parse_number(q)?,
                    None => 1,
                };
                Command::Add {
                    product_id,
                    quantity,
                }
            }
            "remove" | "rm" => Command::Remove {
                product_id: require(parts.next(), "remove", "product id")?,
            },
            "qty" => {
                let product_id = require(parts.next(), "qty", "product id")?;
                let quantity = parse_number(&require(parts.next(), "qty", "quantity")?)?;
                Command::SetQuantity {
                    product_id,
                    quantity,
                }
            }
            "inc" | "+" => Command::Increase {
                product_id: require(parts.next(), "inc", "product id")?,
            },
            "dec" | "-" => Command::Decrease {
                product_id: require(parts.next(), "dec", "product id")?,
            },
            "cart" => Command::ShowCart,
            "clear" => Command::Clear,
            "checkout" | "order" => Command::Checkout,
            "about" => Command::Section(Section::About),
            "contact" => Command::Section(Section::Contact),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn require(
    value: Option<&str>,
    command: &'static str,
    argument: &'static str,
) -> Result<String, CommandError> {
    value
        .map(str::to_string)
        .ok_or(CommandError::MissingArgument { command, argument })
}

fn parse_number<T: FromStr>(value: &str) -> Result<T, CommandError> {
    value
        .parse()
        .map_err(|_| CommandError::InvalidNumber(value.to_string()))
}
