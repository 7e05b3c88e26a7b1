//! Built-in encoding table.

use crate::entry::EncodingTraits;

const SINGLE: EncodingTraits = EncodingTraits::single_byte();
const UTF16: EncodingTraits = EncodingTraits::wide(2, 4);
const UTF32: EncodingTraits = EncodingTraits::wide(4, 4);
/// Stateful 7-bit encodings: bytes look like ASCII but do not mean ASCII.
const STATEFUL: EncodingTraits = EncodingTraits {
    dummy: true,
    ascii_compatible: false,
    min_length: 1,
    max_length: 8,
};

/// Encodings in entry-index order.
pub(crate) const ENCODINGS: &[(&str, EncodingTraits)] = &[
    ("ASCII-8BIT", SINGLE),
    ("UTF-8", EncodingTraits::multi_byte(4)),
    ("US-ASCII", SINGLE),
    ("Big5", EncodingTraits::multi_byte(2)),
    ("CP949", EncodingTraits::multi_byte(2)),
    ("Emacs-Mule", EncodingTraits::multi_byte(4)),
    ("EUC-JP", EncodingTraits::multi_byte(3)),
    ("EUC-KR", EncodingTraits::multi_byte(2)),
    ("EUC-TW", EncodingTraits::multi_byte(4)),
    ("GB18030", EncodingTraits::multi_byte(4)),
    ("GBK", EncodingTraits::multi_byte(2)),
    ("ISO-8859-1", SINGLE),
    ("ISO-8859-2", SINGLE),
    ("ISO-8859-3", SINGLE),
    ("ISO-8859-4", SINGLE),
    ("ISO-8859-5", SINGLE),
    ("ISO-8859-6", SINGLE),
    ("ISO-8859-7", SINGLE),
    ("ISO-8859-8", SINGLE),
    ("ISO-8859-9", SINGLE),
    ("ISO-8859-10", SINGLE),
    ("ISO-8859-11", SINGLE),
    ("ISO-8859-13", SINGLE),
    ("ISO-8859-14", SINGLE),
    ("ISO-8859-15", SINGLE),
    ("ISO-8859-16", SINGLE),
    ("KOI8-R", SINGLE),
    ("KOI8-U", SINGLE),
    ("Shift_JIS", EncodingTraits::multi_byte(2)),
    ("UTF-16BE", UTF16),
    ("UTF-16LE", UTF16),
    ("UTF-32BE", UTF32),
    ("UTF-32LE", UTF32),
    ("Windows-31J", EncodingTraits::multi_byte(2)),
    ("Windows-1250", SINGLE),
    ("Windows-1251", SINGLE),
    ("Windows-1252", SINGLE),
    ("Windows-1253", SINGLE),
    ("Windows-1254", SINGLE),
    ("Windows-1257", SINGLE),
    ("IBM437", SINGLE),
    ("IBM866", SINGLE),
    ("UTF8-MAC", EncodingTraits::multi_byte(4)),
    ("UTF-16", UTF16.dummy()),
    ("UTF-32", UTF32.dummy()),
    ("UTF-7", STATEFUL),
    ("ISO-2022-JP", STATEFUL),
];

/// Aliases as `(alias, canonical name)`.
pub(crate) const ALIASES: &[(&str, &str)] = &[
    ("BINARY", "ASCII-8BIT"),
    ("CP65001", "UTF-8"),
    ("ASCII", "US-ASCII"),
    ("ANSI_X3.4-1968", "US-ASCII"),
    ("646", "US-ASCII"),
    ("CP950", "Big5"),
    ("eucJP", "EUC-JP"),
    ("eucKR", "EUC-KR"),
    ("eucTW", "EUC-TW"),
    ("EUC-CN", "GBK"),
    ("CP936", "GBK"),
    ("ISO8859-1", "ISO-8859-1"),
    ("ISO8859-2", "ISO-8859-2"),
    ("ISO8859-3", "ISO-8859-3"),
    ("ISO8859-4", "ISO-8859-4"),
    ("ISO8859-5", "ISO-8859-5"),
    ("ISO8859-6", "ISO-8859-6"),
    ("ISO8859-7", "ISO-8859-7"),
    ("ISO8859-8", "ISO-8859-8"),
    ("ISO8859-9", "ISO-8859-9"),
    ("ISO8859-10", "ISO-8859-10"),
    ("ISO8859-11", "ISO-8859-11"),
    ("ISO8859-13", "ISO-8859-13"),
    ("ISO8859-14", "ISO-8859-14"),
    ("ISO8859-15", "ISO-8859-15"),
    ("ISO8859-16", "ISO-8859-16"),
    ("CP878", "KOI8-R"),
    ("UCS-2BE", "UTF-16BE"),
    ("UCS-4LE", "UTF-32LE"),
    ("SJIS", "Windows-31J"),
    ("CP932", "Windows-31J"),
    ("csWindows31J", "Windows-31J"),
    ("CP1250", "Windows-1250"),
    ("CP1251", "Windows-1251"),
    ("CP1252", "Windows-1252"),
    ("CP1253", "Windows-1253"),
    ("CP1254", "Windows-1254"),
    ("CP1257", "Windows-1257"),
    ("CP437", "IBM437"),
    ("CP866", "IBM866"),
    ("UTF-8-MAC", "UTF8-MAC"),
    ("UTF-8-HFS", "UTF8-MAC"),
    ("ISO2022-JP", "ISO-2022-JP"),
    ("CP65000", "UTF-7"),
];

/// Encodings loaded when the table is built, in load order, so that they
/// hold the lowest encoding indices.
pub(crate) const PRELOADED: &[&str] = &["ASCII-8BIT", "UTF-8", "US-ASCII"];
