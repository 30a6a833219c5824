//! # Random Command
//!
//! Handles `/random number <min> <max>` and `/random choice <options...>`.
//! Validation happens here; no draw is performed on invalid input.

use crate::application::random;
use crate::domain::types::Reply;

pub fn handle(args: &[String]) -> Reply {
    let Some(action) = args.first() else {
        return Reply::RandomMenu;
    };

    match action.to_ascii_lowercase().as_str() {
        "number" => number(&args[1..]),
        "choice" => choice(&args[1..]),
        _ => Reply::RandomMenu,
    }
}

fn number(bounds: &[String]) -> Reply {
    let [min, max] = bounds else {
        return Reply::RandomNumberUsage;
    };
    let (Ok(min), Ok(max)) = (min.parse::<i64>(), max.parse::<i64>()) else {
        return Reply::InvalidNumberFormat;
    };
    if min >= max {
        return Reply::InvalidRange;
    }

    Reply::RandomNumber {
        value: random::uniform_int(min, max),
    }
}

fn choice(options: &[String]) -> Reply {
    if options.len() < 2 {
        return Reply::InsufficientOptions;
    }

    Reply::RandomChoice {
        value: random::choice(options).to_string(),
    }
}
