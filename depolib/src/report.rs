//! Отчёты — чистые функции над срезом сделок, без ввода-вывода.

use crate::error::{DepoError, Result};
use crate::model::Trade;
use rust_decimal::Decimal;

/// Копия журнала по возрастанию названия компании (побайтовое сравнение).
/// Сортировка стабильная, исходный порядок не меняется.
pub fn sort_by_name(trades: &[Trade]) -> Vec<Trade> {
    let mut sorted = trades.to_vec();
    sorted.sort_by(|a, b| a.company_name.cmp(&b.company_name));
    sorted
}

/// Средняя цена продажи: sum(|qty| * price) / sum(|qty|) по записям с
/// отрицательным количеством. Без продаж — ноль, деления на ноль нет.
pub fn average_sale_price(trades: &[Trade]) -> Decimal {
    let mut volume = Decimal::ZERO;
    let mut shares = Decimal::ZERO;
    for t in trades.iter().filter(|t| t.is_sale()) {
        let qty = Decimal::from(t.quantity.unsigned_abs());
        volume += qty * t.price;
        shares += qty;
    }
    if shares.is_zero() {
        return Decimal::ZERO;
    }
    volume / shares
}

/// Топ-3 позиции по убыванию знакового количества: крупная продажа стоит
/// ниже мелкой покупки. Сортируется копия, вход не трогается.
pub fn top_three_by_quantity(trades: &[Trade]) -> Vec<Trade> {
    let mut sorted = trades.to_vec();
    sorted.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    sorted.truncate(3);
    sorted
}

/// Дивидендная доходность в процентах: dividend * 100 / price.
/// Нулевая цена — явная ошибка, а не тихий NaN.
pub fn dividend_yield(trade: &Trade) -> Result<Decimal> {
    (trade.dividend * Decimal::ONE_HUNDRED)
        .checked_div(trade.price)
        .ok_or(DepoError::ZeroPrice)
}
