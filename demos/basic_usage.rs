// ============================================================================
// Basic Usage Example
// ============================================================================

use coin_calc::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), CalcError> {
    #[cfg(feature = "logging")]
    coin_calc::logging::init();

    println!("=== Coin Calculator Example ===\n");

    let euro = Currency::new(CurrencyRecord {
        title: "Euro".to_string(),
        country: "European Union".to_string(),
        code: "EUR".to_string(),
        symbol: "€".to_string(),
        coins: vec![
            CoinRecord::new("1 cent", Decimal::new(1, 2), 16250, 1670, 2300)
                .with_denomination(Decimal::from(1)),
            CoinRecord::new("50 cent", Decimal::new(50, 2), 24250, 2380, 7800)
                .with_denomination(Decimal::from(50)),
            CoinRecord::new("2 euro", Decimal::from(2), 25750, 2200, 8500),
        ],
    })?;

    let heights = ReferenceTable::new(vec![
        ReferenceObject::new("Pencil", Micrometer::new(190_000)),
        ReferenceObject::new("Broom", Micrometer::new(1_400_000)),
        ReferenceObject::new("Giraffe", Micrometer::new(5_500_000)),
        ReferenceObject::new("Eiffel Tower", Micrometer::new(330_000_000)),
    ])?;

    let masses = ReferenceTable::new(vec![
        ReferenceObject::new("Apple", Milligram::new(180_000)),
        ReferenceObject::new("Cat", Milligram::new(4_500_000)),
        ReferenceObject::new("Car", Milligram::new(1_500_000_000)),
    ])?;

    let sum = Decimal::from(1000);
    println!("Sum: {}{}\n", euro.symbol, sum);

    for coin in &euro.coins {
        let height = coin.sum_to_height(sum)?;
        let mass = coin.sum_to_mass(sum)?;
        let volume = coin.sum_to_volume(sum)?;

        println!("{}:", coin.label());
        println!("  Count:  {}", coin.sum_to_count(sum)?);
        println!("  Height: {} ({:#})", height, height);
        println!("  Mass:   {}", mass);
        println!("  Volume: {:.1}", volume);

        let placement = heights.locate(&height);
        if let (Some(below), Some(above)) = (placement.below, placement.above) {
            println!(
                "  Taller than a {} and shorter than a {} ({}% of the way)",
                below.title.to_lowercase(),
                above.title.to_lowercase(),
                placement.progress.unwrap_or(0)
            );
        }

        let placement = masses.locate(&mass);
        if let Some(below) = placement.below {
            println!("  Heavier than a {}", below.title.to_lowercase());
        }
        println!();
    }

    if let Some(coin) = euro.coin("2 euro") {
        let meters = coin.sum_to_height(sum)?.to("m", 2)?;
        println!("Height of the {} tower in meters: {}", coin.label(), meters);
    }

    Ok(())
}
