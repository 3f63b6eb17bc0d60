use cellfmt::{DateSystem, FormatOptions, Locale, NumberFormat};

#[test]
fn test_default_options() {
    let opts = FormatOptions::default();
    assert_eq!(opts.date_system, DateSystem::Date1900);
    assert_eq!(opts.locale.decimal_separator, '.');
    assert_eq!(opts.locale.thousands_separator, ',');
}

#[test]
fn test_date_system_epoch() {
    assert_eq!(DateSystem::Date1900.epoch_year(), 1900);
    assert_eq!(DateSystem::Date1904.epoch_year(), 1904);
    assert_eq!(FormatOptions::date1904().date_system, DateSystem::Date1904);
}

#[test]
fn test_custom_separators() {
    let locale = Locale {
        decimal_separator: ',',
        thousands_separator: '.',
        ..Locale::en_us()
    };
    let opts = FormatOptions::default().with_locale(locale);
    let fmt = NumberFormat::parse("#,##0.00");
    assert_eq!(fmt.format(1234567.891, &opts), "1.234.567,89");
}
