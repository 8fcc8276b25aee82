/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use thiserror::Error;

use super::consts::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("`{0}` is required")]
    MissingField(&'static str),
}

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn greater_than_zero<
    T: std::str::FromStr + std::cmp::PartialOrd + std::fmt::Display + Default,
>(
    s: &str,
) -> Result<T, String> {
    let num: T = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid number", s))?;

    if num > T::default() {
        Ok(num)
    } else {
        Err(format!("`{}` is not larger than 0", s))
    }
}

/// A field counts as present when it was sent and is not blank.
pub fn require_field(field: &'static str, value: Option<String>) -> Result<String, InputError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(InputError::MissingField(field)),
    }
}
