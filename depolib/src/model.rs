//! Доменная модель — одна сделка журнала и её дата.

use crate::error::{DepoError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Дата сделки в формате DD.MM.YYYY.
///
/// Проверяются только диапазоны: день 1–31, месяц 1–12, год 1900–2100.
/// Сверки с календарём нет — 30.02 проходит, ровно как в старых журналах.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeDate {
    pub day: u8,
    pub month: u8,
    pub year: u16,
}

impl TradeDate {
    pub fn parse(s: &str) -> Result<TradeDate> {
        let re = Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$")
            .map_err(|e| DepoError::Parse(e.to_string()))?;
        let caps = re
            .captures(s)
            .ok_or_else(|| DepoError::Parse(format!("date `{s}`: expected DD.MM.YYYY")))?;

        // группы шаблона всегда числовые, но день может не влезть в u8
        let day: u8 = caps[1]
            .parse()
            .map_err(|e| DepoError::Parse(format!("date `{s}`: day: {e}")))?;
        let month: u8 = caps[2]
            .parse()
            .map_err(|e| DepoError::Parse(format!("date `{s}`: month: {e}")))?;
        let year: u16 = caps[3]
            .parse()
            .map_err(|e| DepoError::Parse(format!("date `{s}`: year: {e}")))?;

        if !(1..=31).contains(&day) {
            return Err(DepoError::Parse(format!("date `{s}`: day out of range")));
        }
        if !(1..=12).contains(&month) {
            return Err(DepoError::Parse(format!("date `{s}`: month out of range")));
        }
        if !(1900..=2100).contains(&year) {
            return Err(DepoError::Parse(format!("date `{s}`: year out of range")));
        }
        Ok(TradeDate { day, month, year })
    }
}

impl fmt::Display for TradeDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// Одна запись журнала: покупка (количество > 0) или продажа (< 0).
/// Поля идут в порядке строки файла.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub isin: String,
    pub company_name: String,
    pub quantity: i64,
    pub price: Decimal,
    pub dividend: Decimal,
    pub date: TradeDate,
    pub investor_name: String,
}

impl Trade {
    pub fn is_sale(&self) -> bool {
        self.quantity < 0
    }
}
