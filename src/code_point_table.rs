//! Names and general categories for the code points this crate writes or
//! classifies, read from an excerpt of `UnicodeData.txt`.

use std::collections::HashMap;

static UNICODE_DATA_TXT: &str = include_str!("data/UnicodeData.txt");

struct UnicodeData {
    lines: std::str::Lines<'static>,
}

impl UnicodeData {
    fn read() -> UnicodeData {
        UnicodeData {
            lines: UNICODE_DATA_TXT.lines(),
        }
    }
}

struct CodePoint {
    code: u32,
    info: CodePointInfo,
}

impl Iterator for UnicodeData {
    type Item = CodePoint;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;

        let fields = line.split(';').collect::<Vec<&'static str>>();
        assert_eq!(
            fields.len(),
            15,
            concat!(
                "1 hexadecimal code field, 14 fields listed in ",
                "http://www.unicode.org/reports/tr44/#UnicodeData.txt"
            )
        );

        let code = u32::from_str_radix(fields[0], 16).expect("hex code");
        Some(CodePoint {
            code,
            info: CodePointInfo {
                name: fields[1],
                category: fields[2],
                alias: fields[10],
            },
        })
    }
}

#[derive(Copy, Clone, Debug)]
pub struct CodePointInfo {
    pub name: &'static str,
    pub alias: &'static str,
    pub category: &'static str,
}

type CodePointMap = HashMap<u32, CodePointInfo>;

pub struct CodePointTable {
    map: CodePointMap,
}

impl CodePointTable {
    pub fn get(&self, code: u32) -> Option<&CodePointInfo> {
        self.map.get(&code)
    }

    /// The general category of `code`, e.g. `"Zs"`, if the table knows it.
    pub fn category(&self, code: u32) -> Option<&'static str> {
        self.get(code).map(|info| info.category)
    }

    /// The character name of `code`.  Control characters have no name of
    /// their own, so their Unicode 1.0 alias stands in.  Code points missing
    /// from the table have an empty name.
    pub fn name(&self, code: u32) -> String {
        match self.get(code) {
            Some(CodePointInfo { name, alias, .. }) if name.starts_with('<') => {
                if alias.is_empty() {
                    name.to_string()
                } else {
                    alias.to_string()
                }
            }
            Some(CodePointInfo { name, alias, .. }) => {
                if alias.is_empty() {
                    name.to_string()
                } else {
                    format!("{name} ({alias})", name = name, alias = alias)
                }
            }
            None => String::new(),
        }
    }

    pub fn full_name(&self, code: u32) -> String {
        let name = self.name(code);
        if name.is_empty() {
            format!("U+{code:04X}", code = code)
        } else {
            format!("U+{code:04X} {name}", code = code, name = name)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&u32, &CodePointInfo)> {
        self.map.iter()
    }
}

pub fn generate_code_point_table() -> CodePointTable {
    let map = UnicodeData::read()
        .map(|code_point| (code_point.code, code_point.info))
        .collect::<CodePointMap>();
    CodePointTable { map }
}

#[test]
fn check_unicode_data() {
    let table = generate_code_point_table();
    assert_eq!(table.name(0x0020), "SPACE");
    assert_eq!(table.category(0x0020), Some("Zs"));
}

#[test]
fn control_names_use_alias() {
    let table = generate_code_point_table();
    assert_eq!(table.full_name(0x000B), "U+000B LINE TABULATION");
    assert_eq!(table.full_name(0x0085), "U+0085 NEXT LINE (NEL)");
    assert_eq!(table.category(0x0085), Some("Cc"));
}

#[test]
fn named_code_points_keep_alias() {
    let table = generate_code_point_table();
    assert_eq!(
        table.full_name(0xFEFF),
        "U+FEFF ZERO WIDTH NO-BREAK SPACE (BYTE ORDER MARK)"
    );
    assert_eq!(table.full_name(0x2028), "U+2028 LINE SEPARATOR");
}

#[test]
fn unknown_code_point_has_bare_full_name() {
    let table = generate_code_point_table();
    assert_eq!(table.name(0x0041), "");
    assert_eq!(table.full_name(0x0041), "U+0041");
    assert!(table.category(0x0041).is_none());
}
