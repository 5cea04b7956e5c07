// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_mul::platform::Endianness;
use decimal_mul::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Decimal Multiplication Example ===\n");
    println!(
        "Platform: {} limbs, {}\n",
        WordWidth::detect(),
        Endianness::detect()
    );

    let pairs = [
        ("123", "456", 0),
        ("0.1", "0.2", 2),
        ("-7", "3", 0),
        ("1.2345", "1.5", 2),
        ("-5", "0", 0),
        ("12345678901234567890.5", "98765432109876543210.25", 3),
    ];

    for (a, b, scale) in pairs {
        let x: Num = a.parse().expect("valid literal");
        let y: Num = b.parse().expect("valid literal");
        let prod = multiply(&x, &y, scale);
        println!(
            "{} * {} (scale {}) = {}  [int_len={}, scale={}]",
            x,
            y,
            scale,
            prod,
            prod.int_len(),
            prod.scale()
        );
    }

    // Force 4-digit limbs and carry normalization every other row
    println!("\nNarrow multiplier with frequent normalization:");
    let multiplier = Multiplier::new(MultiplierConfig::narrow().with_normalization_threshold(2))
        .expect("valid config");
    let big: Num = "9".repeat(40).parse().expect("valid literal");
    println!("{}^2 = {}", big, multiplier.multiply(&big, &big, 0));

    println!("\n=== Example Complete ===");
}
