// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pool tokens, a token is either a card or a joker.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Card, Color};

/// Error returned when parsing an invalid card or joker token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token is not a valid `<rank><suit>` card.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
    /// The token starts with `?` but has no valid joker color.
    #[error("invalid joker '{0}'")]
    InvalidJoker(String),
}

/// A token in a pool of cards.
///
/// A black joker `?B` can replace any club or spade, a red joker `?R` any
/// heart or diamond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Token {
    /// A concrete card.
    Card(Card),
    /// A joker of the given color.
    Joker(Color),
}

impl Token {
    /// Returns the card if this token is not a joker.
    pub fn card(&self) -> Option<Card> {
        match self {
            Token::Card(card) => Some(*card),
            Token::Joker(_) => None,
        }
    }

    /// Returns the joker color if this token is a joker.
    pub fn joker(&self) -> Option<Color> {
        match self {
            Token::Card(_) => None,
            Token::Joker(color) => Some(*color),
        }
    }
}

impl From<Card> for Token {
    fn from(card: Card) -> Self {
        Token::Card(card)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Card(card) => write!(f, "{card}"),
            Token::Joker(color) => write!(f, "?{color}"),
        }
    }
}

impl FromStr for Token {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.strip_prefix('?') {
            Some(color) => {
                let mut chars = color.chars();
                match (chars.next().and_then(Color::from_char), chars.next()) {
                    (Some(color), None) => Ok(Token::Joker(color)),
                    _ => Err(ParseError::InvalidJoker(s.to_string())),
                }
            }
            None => s.parse().map(Token::Card),
        }
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.to_string()
    }
}

impl TryFrom<String> for Token {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Parses whitespace separated tokens.
///
/// ```
/// # use besthand_cards::{parse_tokens, Color, Token};
/// let tokens = parse_tokens("6C 7C ?B").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[2], Token::Joker(Color::Black));
/// ```
pub fn parse_tokens(s: &str) -> Result<Vec<Token>, ParseError> {
    s.split_whitespace().map(str::parse).collect()
}
