//! Built-in number format IDs.
//!
//! Workbooks refer to the standard formats by `numFmtId` alone and leave the
//! code implied. Ids 0 through 49 are reserved for these; custom formats
//! start at 164. Ids in that range that are not listed are locale dependent
//! and have no fixed code.

/// `(numFmtId, format code)`, sorted by id.
static BUILTIN_FORMATS: &[(u32, &str)] = &[
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    // Excel writes m/d/yy here rather than the mm-dd-yy of ECMA-376
    (14, "m/d/yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
];

/// Get the format code for a built-in format ID.
///
/// # Examples
/// ```
/// use cellfmt::format_code_from_id;
///
/// assert_eq!(format_code_from_id(0), Some("General"));
/// assert_eq!(format_code_from_id(14), Some("m/d/yy"));
/// assert_eq!(format_code_from_id(164), None);
/// ```
pub fn format_code_from_id(id: u32) -> Option<&'static str> {
    BUILTIN_FORMATS
        .binary_search_by_key(&id, |(builtin, _)| *builtin)
        .ok()
        .map(|index| BUILTIN_FORMATS[index].1)
}

pub fn is_builtin_format_id(id: u32) -> bool {
    format_code_from_id(id).is_some()
}
