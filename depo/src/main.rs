use depolib::{
    entry::prompt_trade,
    error::Result,
    model::Trade,
    report::{average_sale_price, dividend_yield, sort_by_name, top_three_by_quantity},
    store::Store,
};
use log::error;
use std::io::{self, BufRead, Write};

/// Файл журнала в текущем каталоге. Флагов и конфигурации у программы нет.
const STORE_FILE: &str = "depo.csv";

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        error!("{e}");
        eprintln!("depo: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let store = Store::new(STORE_FILE);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    loop {
        print_menu(&mut out)?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        // каждый отчёт перечитывает журнал заново
        match line.trim() {
            "0" => return Ok(()),
            "1" => print_all(&mut out, &store.load()?)?,
            "2" => print_sorted_names(&mut out, &store.load()?)?,
            "3" => print_average_sale_price(&mut out, &store.load()?)?,
            "4" => print_top_three(&mut out, &store.load()?)?,
            "5" => print_dividend_yields(&mut out, &store.load()?)?,
            "6" => add_entry(&mut input, &mut out, &store)?,
            other => writeln!(out, "Нет такого пункта: `{other}`")?,
        }
    }
}

fn print_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "1 — все записи")?;
    writeln!(out, "2 — компании по алфавиту")?;
    writeln!(out, "3 — средняя цена продажи")?;
    writeln!(out, "4 — топ-3 позиции по количеству")?;
    writeln!(out, "5 — дивидендная доходность")?;
    writeln!(out, "6 — добавить запись")?;
    writeln!(out, "0 — выход")?;
    write!(out, "Пункт меню: ")?;
    out.flush()
}

fn print_all<W: Write>(out: &mut W, trades: &[Trade]) -> io::Result<()> {
    for t in trades {
        writeln!(
            out,
            "{}  {}  {}  {:.2}  {:.2}  {}  {}",
            t.isin, t.company_name, t.quantity, t.price, t.dividend, t.date, t.investor_name
        )?;
    }
    Ok(())
}

fn print_sorted_names<W: Write>(out: &mut W, trades: &[Trade]) -> io::Result<()> {
    for t in sort_by_name(trades) {
        writeln!(out, "{}", t.company_name)?;
    }
    Ok(())
}

fn print_average_sale_price<W: Write>(out: &mut W, trades: &[Trade]) -> io::Result<()> {
    writeln!(out, "Средняя цена продажи: {:.2}", average_sale_price(trades))
}

fn print_top_three<W: Write>(out: &mut W, trades: &[Trade]) -> io::Result<()> {
    for t in top_three_by_quantity(trades) {
        writeln!(out, "{}  {}: {}", t.isin, t.company_name, t.quantity)?;
    }
    Ok(())
}

fn print_dividend_yields<W: Write>(out: &mut W, trades: &[Trade]) -> io::Result<()> {
    for t in trades {
        match dividend_yield(t) {
            Ok(y) => writeln!(out, "{}: {:.2}%", t.company_name, y)?,
            // нулевая цена — доходность не определена
            Err(_) => writeln!(out, "{}: не определена (цена 0)", t.company_name)?,
        }
    }
    Ok(())
}

fn add_entry<R: BufRead, W: Write>(input: &mut R, out: &mut W, store: &Store) -> Result<()> {
    let trade = prompt_trade(input, out)?;
    // неудачная запись не валит меню
    match store.append(&trade) {
        Ok(()) => writeln!(out, "Запись добавлена: {} {}", trade.isin, trade.company_name)?,
        Err(e) => writeln!(out, "Не удалось сохранить запись: {e}")?,
    }
    Ok(())
}
