use depolib::{report, store::Store};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: краткая сводка по журналу depo.csv из текущего каталога
    let trades = Store::new("depo.csv").load()?;
    for t in report::top_three_by_quantity(&trades) {
        println!("{}  {}: {}", t.isin, t.company_name, t.quantity);
    }
    println!("Средняя цена продажи: {:.2}", report::average_sale_price(&trades));
    Ok(())
}
