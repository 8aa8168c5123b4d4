//! Rates command: list the registered locale utility rates.

use rff_model::rates::LOCALE_RATES;

pub fn run_rates() -> anyhow::Result<()> {
    println!(
        "{:<8} {:>12} {:>12} {:>16}",
        "locale", "$/kWh", "$/therm", "$/1000 gal"
    );
    for (locale, rates) in LOCALE_RATES {
        println!(
            "{locale:<8} {:>12.4} {:>12.3} {:>16.2}",
            rates.electric, rates.gas, rates.water
        );
    }
    Ok(())
}
