//! Built-in locale data: separators, month and weekday names.
//!
//! Names exist for en, de, fr and es; other languages use English names
//! with their own separators.

use crate::Locale;

pub(crate) struct Names {
    pub months: [&'static str; 12],
    pub months_short: [&'static str; 12],
    /// Monday first
    pub weekdays: [&'static str; 7],
}

const EN: Names = Names {
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ],
};

const DE: Names = Names {
    months: [
        "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
        "Oktober", "November", "Dezember",
    ],
    months_short: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    weekdays: [
        "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
    ],
};

const FR: Names = Names {
    months: [
        "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
        "octobre", "novembre", "décembre",
    ],
    months_short: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    weekdays: [
        "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
    ],
};

const ES: Names = Names {
    months: [
        "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto", "septiembre",
        "octubre", "noviembre", "diciembre",
    ],
    months_short: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
    weekdays: [
        "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
    ],
};

pub(crate) fn names(locale: &Locale) -> &'static Names {
    match locale.language.as_str() {
        "de" => &DE,
        "fr" => &FR,
        "es" => &ES,
        _ => &EN,
    }
}

/// Decimal and grouping separators for a locale.
pub(crate) fn number_separators(locale: &Locale) -> (&'static str, &'static str) {
    match locale.language.as_str() {
        // Swiss German groups with an apostrophe
        "de" if locale.region_is("CH") => (".", "’"),

        // Comma decimal, period grouping
        "de" | "es" | "it" | "pt" | "nl" | "da" | "no" | "nb" | "pl" | "cs" | "sk" | "hu"
        | "ro" | "bg" | "el" | "ru" | "uk" | "tr" | "id" | "vi" => (",", "."),

        // Comma decimal, space grouping
        "fr" | "sv" | "fi" => (",", "\u{202f}"),

        // Period decimal, comma grouping (default English-like)
        _ => (".", ","),
    }
}

/// Insert grouping separators into a run of integer digits.
pub(crate) fn add_grouping(digits: &str, sep: &str) -> String {
    let len = digits.chars().count();
    if len <= 3 {
        return digits.to_string();
    }

    let mut result = String::with_capacity(digits.len() + (len - 1) / 3 * sep.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(sep);
        }
        result.push(c);
    }
    result
}
