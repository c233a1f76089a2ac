//! Workbook styles: the header band and the wrapped body cells
//!
//! Three cell formats are registered:
//! - 0: the implicit default
//! - 1: header (bold 12pt, white on the platform blue, left/vcenter)
//! - 2: body (wrap enabled, left/top)

/// Index of the header cell format in `cellXfs`.
pub const XF_HEADER: u32 = 1;
/// Index of the body cell format in `cellXfs`.
pub const XF_BODY: u32 = 2;

/// Fill color of the header band (the platform's primary blue).
const HEADER_FILL: &str = "FF0F6CBF";

/// The complete `xl/styles.xml` part.
///
/// Fill indices 0 and 1 are the mandatory `none`/`gray125` pattern fills;
/// the header fill therefore lands at index 2.
pub fn styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<fonts count="2">
<font><sz val="11"/><name val="Calibri"/></font>
<font><b/><sz val="12"/><color rgb="FFFFFFFF"/><name val="Calibri"/></font>
</fonts>
<fills count="3">
<fill><patternFill patternType="none"/></fill>
<fill><patternFill patternType="gray125"/></fill>
<fill><patternFill patternType="solid"><fgColor rgb="{HEADER_FILL}"/><bgColor indexed="64"/></patternFill></fill>
</fills>
<borders count="1">
<border><left/><right/><top/><bottom/><diagonal/></border>
</borders>
<cellStyleXfs count="1">
<xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
</cellStyleXfs>
<cellXfs count="3">
<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/>
<xf numFmtId="0" fontId="1" fillId="2" borderId="0" xfId="0" applyFont="1" applyFill="1" applyAlignment="1"><alignment horizontal="left" vertical="center"/></xf>
<xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0" applyAlignment="1"><alignment horizontal="left" vertical="top" wrapText="1"/></xf>
</cellXfs>
</styleSheet>"#
    )
}
