//! Formatting conventions for the supported cultures.
//!
//! Mirrors the display names and date/number/currency output of the .NET
//! invariant data for these seven cultures.

use chrono::{
    Datelike,
    NaiveDate,
};

/// Where the currency symbol sits relative to the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SymbolPlacement {
    /// `$42.00`
    Prefix,
    /// `€ 42,00`
    PrefixSpace,
    /// `42,00 kr`
    SuffixSpace,
}

/// How the long date is assembled from its localized parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LongDatePattern {
    /// `Friday, August 29, 2026`
    WeekdayMonthDayYear,
    /// `venerdì 29 agosto 2026`
    WeekdayDayMonthYear,
    /// `29 августа 2026 г.`
    DayMonthYearMarker,
    /// `29 Ağustos 2026 Cuma`
    DayMonthYearWeekday,
    /// `2026年8月29日`
    YearMonthDay,
}

#[derive(Debug)]
struct NumberConventions {
    group: &'static str,
    decimal: &'static str,
}

#[derive(Debug)]
struct CurrencyConventions {
    symbol: &'static str,
    placement: SymbolPlacement,
    decimals: usize,
}

#[derive(Debug)]
struct DateConventions {
    pattern: LongDatePattern,
    /// January first.
    months: [&'static str; 12],
    /// Monday first.
    weekdays: [&'static str; 7],
}

/// A culture identifier plus the conventions that govern its output.
#[derive(Debug)]
pub struct Culture {
    id: &'static str,
    english_name: &'static str,
    number: NumberConventions,
    currency: CurrencyConventions,
    date: DateConventions,
}

static EN_US: Culture = Culture {
    id: "en-US",
    english_name: "English (United States)",
    number: NumberConventions { group: ",", decimal: "." },
    currency: CurrencyConventions { symbol: "$", placement: SymbolPlacement::Prefix, decimals: 2 },
    date: DateConventions {
        pattern: LongDatePattern::WeekdayMonthDayYear,
        months: [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ],
        weekdays: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
    },
};

static CULTURES: &[Culture] = &[
    Culture {
        id: "it-IT",
        english_name: "Italian (Italy)",
        number: NumberConventions { group: ".", decimal: "," },
        currency: CurrencyConventions {
            symbol: "€",
            placement: SymbolPlacement::SuffixSpace,
            decimals: 2,
        },
        date: DateConventions {
            pattern: LongDatePattern::WeekdayDayMonthYear,
            months: [
                "gennaio",
                "febbraio",
                "marzo",
                "aprile",
                "maggio",
                "giugno",
                "luglio",
                "agosto",
                "settembre",
                "ottobre",
                "novembre",
                "dicembre",
            ],
            weekdays: [
                "lunedì",
                "martedì",
                "mercoledì",
                "giovedì",
                "venerdì",
                "sabato",
                "domenica",
            ],
        },
    },
    Culture {
        id: "ja-JP",
        english_name: "Japanese (Japan)",
        number: NumberConventions { group: ",", decimal: "." },
        currency: CurrencyConventions {
            symbol: "￥",
            placement: SymbolPlacement::Prefix,
            decimals: 0,
        },
        date: DateConventions {
            pattern: LongDatePattern::YearMonthDay,
            months: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ],
            weekdays: ["月曜日", "火曜日", "水曜日", "木曜日", "金曜日", "土曜日", "日曜日"],
        },
    },
    Culture {
        id: "nl-NL",
        english_name: "Dutch (Netherlands)",
        number: NumberConventions { group: ".", decimal: "," },
        currency: CurrencyConventions {
            symbol: "€",
            placement: SymbolPlacement::PrefixSpace,
            decimals: 2,
        },
        date: DateConventions {
            pattern: LongDatePattern::WeekdayDayMonthYear,
            months: [
                "januari",
                "februari",
                "maart",
                "april",
                "mei",
                "juni",
                "juli",
                "augustus",
                "september",
                "oktober",
                "november",
                "december",
            ],
            weekdays: [
                "maandag",
                "dinsdag",
                "woensdag",
                "donderdag",
                "vrijdag",
                "zaterdag",
                "zondag",
            ],
        },
    },
    Culture {
        id: "ru-RU",
        english_name: "Russian (Russia)",
        number: NumberConventions { group: "\u{a0}", decimal: "," },
        currency: CurrencyConventions {
            symbol: "₽",
            placement: SymbolPlacement::SuffixSpace,
            decimals: 2,
        },
        date: DateConventions {
            pattern: LongDatePattern::DayMonthYearMarker,
            months: [
                "января",
                "февраля",
                "марта",
                "апреля",
                "мая",
                "июня",
                "июля",
                "августа",
                "сентября",
                "октября",
                "ноября",
                "декабря",
            ],
            weekdays: [
                "понедельник",
                "вторник",
                "среда",
                "четверг",
                "пятница",
                "суббота",
                "воскресенье",
            ],
        },
    },
    Culture {
        id: "sv-SE",
        english_name: "Swedish (Sweden)",
        number: NumberConventions { group: "\u{a0}", decimal: "," },
        currency: CurrencyConventions {
            symbol: "kr",
            placement: SymbolPlacement::SuffixSpace,
            decimals: 2,
        },
        date: DateConventions {
            pattern: LongDatePattern::WeekdayDayMonthYear,
            months: [
                "januari",
                "februari",
                "mars",
                "april",
                "maj",
                "juni",
                "juli",
                "augusti",
                "september",
                "oktober",
                "november",
                "december",
            ],
            weekdays: ["måndag", "tisdag", "onsdag", "torsdag", "fredag", "lördag", "söndag"],
        },
    },
    Culture {
        id: "tr-TR",
        english_name: "Turkish (Turkey)",
        number: NumberConventions { group: ".", decimal: "," },
        currency: CurrencyConventions {
            symbol: "₺",
            placement: SymbolPlacement::Prefix,
            decimals: 2,
        },
        date: DateConventions {
            pattern: LongDatePattern::DayMonthYearWeekday,
            months: [
                "Ocak",
                "Şubat",
                "Mart",
                "Nisan",
                "Mayıs",
                "Haziran",
                "Temmuz",
                "Ağustos",
                "Eylül",
                "Ekim",
                "Kasım",
                "Aralık",
            ],
            weekdays: [
                "Pazartesi",
                "Salı",
                "Çarşamba",
                "Perşembe",
                "Cuma",
                "Cumartesi",
                "Pazar",
            ],
        },
    },
];

impl Culture {
    /// Finds a supported culture by its identifier, case-insensitively.
    #[must_use]
    pub fn find(id: &str) -> Option<&'static Self> {
        if EN_US.id.eq_ignore_ascii_case(id) {
            return Some(&EN_US);
        }
        CULTURES.iter().find(|culture| culture.id.eq_ignore_ascii_case(id))
    }

    /// The default culture, used when a request carries no usable culture.
    #[must_use]
    pub fn invariant() -> &'static Self {
        &EN_US
    }

    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// English display name, e.g. `Swedish (Sweden)`.
    #[must_use]
    pub const fn english_name(&self) -> &'static str {
        self.english_name
    }

    /// Formats a value with two decimals and this culture's separators.
    ///
    /// Matches the .NET `"n"` numeric format, e.g. `1.234.567,89` for it-IT.
    #[must_use]
    pub fn decimal(&self, value: f64) -> String {
        format_grouped(value, 2, self.number.group, self.number.decimal)
    }

    /// Formats an amount with this culture's currency conventions.
    ///
    /// Matches the .NET `"C"` format, e.g. `￥42` for ja-JP.
    #[must_use]
    pub fn currency(&self, value: f64) -> String {
        let amount = format_grouped(
            value,
            self.currency.decimals,
            self.number.group,
            self.number.decimal,
        );

        match self.currency.placement {
            SymbolPlacement::Prefix => format!("{}{amount}", self.currency.symbol),
            SymbolPlacement::PrefixSpace => format!("{}\u{a0}{amount}", self.currency.symbol),
            SymbolPlacement::SuffixSpace => format!("{amount}\u{a0}{}", self.currency.symbol),
        }
    }

    /// Formats a date with this culture's long-date convention.
    ///
    /// Matches the .NET `"D"` format, e.g. `fredag 29 augusti 2026` for sv-SE.
    #[must_use]
    pub fn long_date(&self, date: NaiveDate) -> String {
        let day = date.day();
        let year = date.year();
        let month = self
            .date
            .months
            .get(date.month0() as usize)
            .copied()
            .unwrap_or_default();
        let weekday = self
            .date
            .weekdays
            .get(date.weekday().num_days_from_monday() as usize)
            .copied()
            .unwrap_or_default();

        match self.date.pattern {
            LongDatePattern::WeekdayMonthDayYear => format!("{weekday}, {month} {day}, {year}"),
            LongDatePattern::WeekdayDayMonthYear => format!("{weekday} {day} {month} {year}"),
            LongDatePattern::DayMonthYearMarker => format!("{day} {month} {year} г."),
            LongDatePattern::DayMonthYearWeekday => format!("{day} {month} {year} {weekday}"),
            LongDatePattern::YearMonthDay => format!("{year}年{}月{day}日", date.month()),
        }
    }
}

/// Renders `value` with `decimals` fraction digits, a grouped integer part,
/// and the given separators.
fn format_grouped(value: f64, decimals: usize, group: &str, decimal: &str) -> String {
    let rendered = format!("{value:.decimals$}");
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let digits = int_part.len();
    let mut out = String::from(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push_str(group);
        }
        out.push(ch);
    }

    if let Some(frac) = frac_part {
        out.push_str(decimal);
        out.push_str(frac);
    }

    out
}
