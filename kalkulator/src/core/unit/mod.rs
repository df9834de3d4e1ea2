mod area;
mod days;
mod emission;
mod money;
mod percent;

pub use area::SquareMeters;
pub use days::Days;
pub use emission::KilogramCo2e;
pub use money::NorwegianKrone;
pub use percent::Percent;

//Number rendering in the nb-NO locale: non-breaking-space thousands
//grouping and a comma as the decimal separator
pub(crate) fn format_nb(value: f64, decimals: usize) -> String {
    let rendered = format!("{value:.decimals$}");
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac_part) => format!("{sign}{grouped},{frac_part}"),
        None => format!("{sign}{grouped}"),
    }
}
