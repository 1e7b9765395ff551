//! Пошаговый ввод новой записи: каждое поле спрашивается заново,
//! пока не пройдёт свою проверку.

use crate::error::{DepoError, Result};
use crate::model::{Trade, TradeDate};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

/// Собирает запись, читая поля по одному из `input` и печатая приглашения
/// в `out`. Число попыток не ограничено; конец ввода посреди опроса —
/// ошибка разбора.
pub fn prompt_trade<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Trade> {
    let isin = ask(input, out, "ISIN (12 символов): ", |s| {
        let t = token(s)?;
        if t.len() != 12 {
            return Err("ожидается ровно 12 символов".into());
        }
        Ok(t)
    })?;
    let company_name = ask(input, out, "Компания: ", token)?;
    let quantity = ask(input, out, "Количество (минус — продажа): ", |s| {
        s.parse::<i64>().map_err(|e| e.to_string())
    })?;
    let price = ask(input, out, "Цена: ", non_negative)?;
    let dividend = ask(input, out, "Дивиденд на акцию: ", non_negative)?;
    let date = ask(input, out, "Дата (DD.MM.YYYY): ", |s| {
        TradeDate::parse(s).map_err(|e| e.to_string())
    })?;
    let investor_name = ask(input, out, "Инвестор: ", token)?;

    Ok(Trade {
        isin,
        company_name,
        quantity,
        price,
        dividend,
        date,
        investor_name,
    })
}

/// Одно поле: печатает приглашение и читает строки, пока `parse` не примет.
fn ask<R: BufRead, W: Write, T>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    parse: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<T> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(DepoError::Parse("unexpected end of input".into()));
        }
        match parse(line.trim()) {
            Ok(v) => return Ok(v),
            Err(msg) => writeln!(out, "Некорректное значение: {msg}")?,
        }
    }
}

/// Первое слово строки; пустой ввод и `;` внутри не годятся —
/// разделитель сломал бы строку журнала.
fn token(s: &str) -> std::result::Result<String, String> {
    let t = s.split_whitespace().next().ok_or("пустой ввод")?;
    if t.contains(';') {
        return Err("символ `;` недопустим".into());
    }
    Ok(t.to_string())
}

fn non_negative(s: &str) -> std::result::Result<Decimal, String> {
    let v = s.parse::<Decimal>().map_err(|e| e.to_string())?;
    if v.is_sign_negative() {
        return Err("значение не может быть отрицательным".into());
    }
    Ok(v)
}
