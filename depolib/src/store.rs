//! Журнал на диске: одна запись на строку, поля через `;`:
//! isin;company_name;quantity;price;dividend;date;investor_name

use crate::{
    error::{DepoError, Result},
    model::{Trade, TradeDate},
};
use csv::{ReaderBuilder, WriterBuilder};
use log::warn;
use rust_decimal::Decimal;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

#[derive(serde::Deserialize)]
struct RawRow {
    isin: String,
    company_name: String,
    quantity: String,
    price: String,
    dividend: String,
    date: String,
    investor_name: String,
}

#[derive(serde::Serialize)]
struct OutRow<'a> {
    isin: &'a str,
    company_name: &'a str,
    quantity: i64,
    price: String,
    dividend: String,
    date: String,
    investor_name: &'a str,
}

/// Читает весь журнал. Битая строка (меньше семи полей, нечисловое поле,
/// кривая дата) не валит чтение: предупреждение в лог и дальше.
pub fn read_trades<R: BufRead>(r: R) -> Result<Vec<Trade>> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(r);

    let mut trades = Vec::new();
    for (i, rec) in rdr.deserialize::<RawRow>().enumerate() {
        let row = match rec {
            Ok(row) => row,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                // ошибка csv сама называет номер записи
                warn!("skipping record: {e}");
                continue;
            }
        };
        match parse_row(row, i + 1) {
            Ok(t) => trades.push(t),
            Err(e) => warn!("skipping record: {e}"),
        }
    }
    Ok(trades)
}

fn parse_row(row: RawRow, line: usize) -> Result<Trade> {
    let quantity = row
        .quantity
        .trim()
        .parse::<i64>()
        .map_err(|e| DepoError::Parse(format!("line {line}: quantity: {e}")))?;
    let price = row
        .price
        .trim()
        .parse::<Decimal>()
        .map_err(|e| DepoError::Parse(format!("line {line}: price: {e}")))?;
    let dividend = row
        .dividend
        .trim()
        .parse::<Decimal>()
        .map_err(|e| DepoError::Parse(format!("line {line}: dividend: {e}")))?;
    let date = TradeDate::parse(row.date.trim()).map_err(|e| match e {
        DepoError::Parse(msg) => DepoError::Parse(format!("line {line}: {msg}")),
        other => other,
    })?;

    Ok(Trade {
        isin: row.isin,
        company_name: row.company_name,
        quantity,
        price,
        dividend,
        date,
        investor_name: row.investor_name,
    })
}

/// Пишет одну запись в формате журнала, без завершающего перевода строки:
/// разделение строк — забота вызывающего.
pub fn write_trade<W: Write>(mut w: W, t: &Trade) -> Result<()> {
    let mut line = Vec::new();
    {
        let mut wrt = WriterBuilder::new()
            .delimiter(b';')
            .has_headers(false)
            .from_writer(&mut line);
        wrt.serialize(OutRow {
            isin: &t.isin,
            company_name: &t.company_name,
            quantity: t.quantity,
            price: format!("{:.2}", t.price),
            dividend: format!("{:.2}", t.dividend),
            date: t.date.to_string(),
            investor_name: &t.investor_name,
        })?;
        wrt.flush()?;
    }
    while matches!(line.last(), Some(b'\n' | b'\r')) {
        line.pop();
    }
    w.write_all(&line)?;
    Ok(())
}

/// Файловый журнал. Чтение — всегда целиком заново, запись — только в конец.
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Store {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Vec<Trade>> {
        let f = File::open(&self.path)?;
        read_trades(BufReader::new(f))
    }

    /// Дописывает запись в конец. Перед ней, если файл не пуст, ставится
    /// перевод строки: первая строка файла идёт без ведущего пустого места.
    pub fn append(&self, t: &Trade) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        if f.metadata()?.len() > 0 {
            f.write_all(b"\n")?;
        }
        write_trade(&mut f, t)?;
        f.flush()?;
        Ok(())
    }
}
