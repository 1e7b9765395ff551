use depolib::{
    error::DepoError,
    model::{Trade, TradeDate},
    report::{average_sale_price, dividend_yield, sort_by_name, top_three_by_quantity},
    store::read_trades,
};
use rust_decimal::Decimal;
use std::io::Cursor;

fn trade(name: &str, qty: i64, price: &str, div: &str) -> Trade {
    Trade {
        isin: "ISIN00000000".into(),
        company_name: name.into(),
        quantity: qty,
        price: Decimal::from_str_exact(price).unwrap(),
        dividend: Decimal::from_str_exact(div).unwrap(),
        date: TradeDate::parse("01.01.2020").unwrap(),
        investor_name: "Alice".into(),
    }
}

#[test]
fn sort_by_name_is_bytewise_ascending_and_idempotent() {
    let trades = vec![trade("Zeta", 1, "1.00", "0"), trade("Acme", 2, "1.00", "0"), trade("acme", 3, "1.00", "0")];
    let sorted = sort_by_name(&trades);
    // побайтово: заглавные раньше строчных
    let names: Vec<&str> = sorted.iter().map(|t| t.company_name.as_str()).collect();
    assert_eq!(names, ["Acme", "Zeta", "acme"]);
    assert_eq!(sort_by_name(&sorted), sorted);
    // вход не изменился
    assert_eq!(trades[0].company_name, "Zeta");
}

#[test]
fn average_sale_price_weighs_by_quantity() {
    let trades = vec![
        trade("A", -10, "10.00", "0"),
        trade("B", -30, "20.00", "0"),
        trade("C", 100, "99.00", "0"),
    ];
    // (10*10 + 30*20) / 40 = 17.5
    assert_eq!(average_sale_price(&trades), Decimal::from_str_exact("17.5").unwrap());
}

#[test]
fn average_sale_price_without_sales_is_zero() {
    assert_eq!(average_sale_price(&[]), Decimal::ZERO);
    let buys = vec![trade("A", 10, "10.00", "0"), trade("B", 0, "20.00", "0")];
    assert_eq!(average_sale_price(&buys), Decimal::ZERO);
}

#[test]
fn top_three_caps_at_three_and_ranks_by_signed_quantity() {
    let trades = vec![
        trade("A", 5, "1.00", "0"),
        trade("B", -500, "1.00", "0"),
        trade("C", 50, "1.00", "0"),
        trade("D", 7, "1.00", "0"),
    ];
    let top = top_three_by_quantity(&trades);
    let names: Vec<&str> = top.iter().map(|t| t.company_name.as_str()).collect();
    // крупная продажа уходит в самый низ и в тройку не попадает
    assert_eq!(names, ["C", "D", "A"]);
    // вход не изменился
    let original: Vec<&str> = trades.iter().map(|t| t.company_name.as_str()).collect();
    assert_eq!(original, ["A", "B", "C", "D"]);
}

#[test]
fn top_three_with_short_input_returns_everything_sorted() {
    let trades = vec![trade("A", 1, "1.00", "0"), trade("B", 2, "1.00", "0")];
    let top = top_three_by_quantity(&trades);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].company_name, "B");
}

#[test]
fn dividend_yield_is_percent_of_price() {
    let t = trade("A", 1, "100", "5");
    assert_eq!(dividend_yield(&t).expect("yield"), Decimal::from(5));
}

#[test]
fn dividend_yield_on_zero_price_is_an_error() {
    let t = trade("A", 1, "0", "0");
    assert!(matches!(dividend_yield(&t), Err(DepoError::ZeroPrice)));
}

#[test]
fn end_to_end_sample_journal() {
    let input = "ISIN000000001;Acme;100;10.00;0.50;01.01.2020;Alice\n\
                 ISIN000000002;Zeta;-50;12.00;0.00;02.01.2020;Bob";
    let trades = read_trades(Cursor::new(input)).expect("read");
    assert_eq!(trades.len(), 2);

    let sorted = sort_by_name(&trades);
    assert_eq!(sorted[0].company_name, "Acme");
    assert_eq!(sorted[1].company_name, "Zeta");

    assert_eq!(average_sale_price(&trades), Decimal::from(12));

    let top = top_three_by_quantity(&trades);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].company_name, "Acme");
    assert_eq!(top[0].quantity, 100);
    assert_eq!(top[1].company_name, "Zeta");
    assert_eq!(top[1].quantity, -50);
}
