//! Movement register formatting

use crate::models::Money;

/// Format a single register row: row number, movement type, amount
pub fn format_movement_row(index: usize, amount: Money) -> String {
    let kind = if amount.is_positive() {
        "deposit"
    } else {
        "withdrawal"
    };

    format!("{:>3} {:10} {:>12}", index, kind, amount.to_string())
}

/// Format a movement register, newest entry on top
pub fn format_movement_register(movements: &[Money]) -> String {
    if movements.is_empty() {
        return "No movements.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:>3} {:10} {:>12}\n", "#", "Type", "Amount"));
    output.push_str(&"-".repeat(27));
    output.push('\n');

    for (i, amount) in movements.iter().enumerate().rev() {
        output.push_str(&format_movement_row(i + 1, *amount));
        output.push('\n');
    }

    output
}
