use crate::currencies::CURRENCIES;

pub fn run() {
    println!("Supported currencies ({}):", CURRENCIES.len());
    for currency in CURRENCIES {
        println!("  {}  {:6}  {}", currency.code, currency.symbol, currency.name);
    }
}
