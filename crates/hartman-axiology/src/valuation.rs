//! Score-band lookup strings used by report narration.
//!
//! Bands are checked top to bottom and the first match wins; where two bands
//! overlap (the DIF table lists 30 twice) the earlier one takes the score.

/// Valuation of a single dimension score.
pub fn dimension_score_valuation(score: i32) -> &'static str {
    match score {
        0..=5 => "Excelente",
        6..=9 => "Muy bien",
        10..=14 => "Bien",
        15..=19 => "Bloqueo ligero",
        20..=28 => "Bloqueo alto",
        29..=35 => "Bloqueo muy alto",
        _ => "Bloqueo severo",
    }
}

/// Valuation of the negative-attitude percentage (AI%).
pub fn negative_attitude_valuation(percent: i32) -> &'static str {
    match percent {
        50..=53 => "Excelente, una persona positiva, dinámica",
        54..=57 => "Muy buena, la persona es apreciativa, de mente abierta y está satisfecha",
        58..=61 => "Buena, la persona está un poco dudosa, tolera de manera cautelosa",
        62..=65 => "Regular, la persona duda, es tímida, preocupada y reacia",
        66..=69 => "Pobre, la persona es resistente, aprensiva, suspicaz, enojada y está triste",
        70..=73 => "Muy Pobre, inicia depresión, la persona siente miedo por el futuro y se ha empezado a paralizar",
        74..=99 => "Extremadamente pobre, la actitud es de una persona deprimida con enojo y hostilidad",
        _ => "Se recomienda explorar con un psiquiatra para que eventualmente la persona tome algún tipo de antidepresivo",
    }
}

/// Valuation of the total deviation (DIF).
pub fn total_deviation_valuation(score: i32) -> &'static str {
    match score {
        0..=20 => "Excelente",
        21..=30 => "Muy buena",
        31..=38 => "Buena",
        39..=42 => "Débil",
        43..=50 => "Bloqueada",
        51..=80 => "Muy bloqueada",
        _ => "Severamente bloqueada",
    }
}

/// Valuation of the imbalance percentage (DIM%).
pub fn imbalance_percent_valuation(percent: i32) -> &'static str {
    match percent {
        0..=10 => "Excelente",
        11..=20 => "Muy buena",
        21..=38 => "Buena",
        39..=42 => "Débil",
        43..=50 => "Bloqueada",
        51..=70 => "Muy bloqueada",
        _ => "Severamente bloqueada",
    }
}
