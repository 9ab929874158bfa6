//! Glyph catalog and the digit lookup tables.
//!
//! Two numeral registers exist for each size: the formal register (壹貳參…)
//! used for hours and months, and the common register (一二三…) used for
//! minutes and days. Time glyphs are the large 2×2 grid; date glyphs are the
//! small row underneath.

use crate::{
    foundation::error::{ClockError, ClockResult},
    glyph::id::GlyphId,
};

/// 零
pub const FORMAL_0: GlyphId = GlyphId::new(1);
/// 壹
pub const FORMAL_1: GlyphId = GlyphId::new(2);
/// 貳
pub const FORMAL_2: GlyphId = GlyphId::new(3);
/// 參
pub const FORMAL_3: GlyphId = GlyphId::new(4);
/// 肆
pub const FORMAL_4: GlyphId = GlyphId::new(5);
/// 伍
pub const FORMAL_5: GlyphId = GlyphId::new(6);
/// 陸
pub const FORMAL_6: GlyphId = GlyphId::new(7);
/// 柒
pub const FORMAL_7: GlyphId = GlyphId::new(8);
/// 捌
pub const FORMAL_8: GlyphId = GlyphId::new(9);
/// 玖
pub const FORMAL_9: GlyphId = GlyphId::new(10);
/// 拾
pub const FORMAL_10: GlyphId = GlyphId::new(11);

/// 〇
pub const COMMON_0: GlyphId = GlyphId::new(12);
/// 一
pub const COMMON_1: GlyphId = GlyphId::new(13);
/// 二
pub const COMMON_2: GlyphId = GlyphId::new(14);
/// 三
pub const COMMON_3: GlyphId = GlyphId::new(15);
/// 四
pub const COMMON_4: GlyphId = GlyphId::new(16);
/// 五
pub const COMMON_5: GlyphId = GlyphId::new(17);
/// 六
pub const COMMON_6: GlyphId = GlyphId::new(18);
/// 七
pub const COMMON_7: GlyphId = GlyphId::new(19);
/// 八
pub const COMMON_8: GlyphId = GlyphId::new(20);
/// 九
pub const COMMON_9: GlyphId = GlyphId::new(21);
/// 十
pub const COMMON_10: GlyphId = GlyphId::new(22);
/// 廿
pub const COMMON_20: GlyphId = GlyphId::new(23);
/// 卅
pub const COMMON_30: GlyphId = GlyphId::new(24);

/// 點, "o'clock" / point.
pub const POINT: GlyphId = GlyphId::new(25);
/// 整, exactly on the hour.
pub const EXACT: GlyphId = GlyphId::new(26);
/// 半, half past.
pub const HALF: GlyphId = GlyphId::new(27);

/// Small 壹
pub const DATE_FORMAL_1: GlyphId = GlyphId::new(28);
/// Small 貳
pub const DATE_FORMAL_2: GlyphId = GlyphId::new(29);
/// Small 參
pub const DATE_FORMAL_3: GlyphId = GlyphId::new(30);
/// Small 肆
pub const DATE_FORMAL_4: GlyphId = GlyphId::new(31);
/// Small 伍
pub const DATE_FORMAL_5: GlyphId = GlyphId::new(32);
/// Small 陸
pub const DATE_FORMAL_6: GlyphId = GlyphId::new(33);
/// Small 柒
pub const DATE_FORMAL_7: GlyphId = GlyphId::new(34);
/// Small 捌
pub const DATE_FORMAL_8: GlyphId = GlyphId::new(35);
/// Small 玖
pub const DATE_FORMAL_9: GlyphId = GlyphId::new(36);
/// Small 拾
pub const DATE_FORMAL_10: GlyphId = GlyphId::new(37);

/// Small 一
pub const DATE_COMMON_1: GlyphId = GlyphId::new(38);
/// Small 二
pub const DATE_COMMON_2: GlyphId = GlyphId::new(39);
/// Small 三
pub const DATE_COMMON_3: GlyphId = GlyphId::new(40);
/// Small 四
pub const DATE_COMMON_4: GlyphId = GlyphId::new(41);
/// Small 五
pub const DATE_COMMON_5: GlyphId = GlyphId::new(42);
/// Small 六
pub const DATE_COMMON_6: GlyphId = GlyphId::new(43);
/// Small 七
pub const DATE_COMMON_7: GlyphId = GlyphId::new(44);
/// Small 八
pub const DATE_COMMON_8: GlyphId = GlyphId::new(45);
/// Small 九
pub const DATE_COMMON_9: GlyphId = GlyphId::new(46);
/// Small 十
pub const DATE_COMMON_10: GlyphId = GlyphId::new(47);
/// Small 廿
pub const DATE_COMMON_20: GlyphId = GlyphId::new(48);
/// Small 卅
pub const DATE_COMMON_30: GlyphId = GlyphId::new(49);

/// 月 label.
pub const LABEL_MONTH: GlyphId = GlyphId::new(50);
/// 日 label, also the weekday glyph for Sunday.
pub const LABEL_DAY: GlyphId = GlyphId::new(51);
/// 週 label.
pub const LABEL_WEEK: GlyphId = GlyphId::new(52);

/// Weekday 0 shares the 日 label glyph.
pub const SUNDAY: GlyphId = LABEL_DAY;

/// Hour ones, formal register. Index 0 holds 拾.
pub const FORMAL_ONES: [GlyphId; 10] = [
    FORMAL_10, FORMAL_1, FORMAL_2, FORMAL_3, FORMAL_4, FORMAL_5, FORMAL_6, FORMAL_7, FORMAL_8,
    FORMAL_9,
];

/// Hour tens, formal register. Only 0..=2 occur.
pub const FORMAL_TENS: [GlyphId; 3] = [GlyphId::BLANK, FORMAL_10, FORMAL_2];

/// Minute ones, common register. Index 0 holds 十.
pub const COMMON_ONES: [GlyphId; 10] = [
    COMMON_10, COMMON_1, COMMON_2, COMMON_3, COMMON_4, COMMON_5, COMMON_6, COMMON_7, COMMON_8,
    COMMON_9,
];

/// Minute tens, common register: 〇 十 廿 卅 四 五.
pub const COMMON_TENS: [GlyphId; 6] = [
    COMMON_0, COMMON_10, COMMON_20, COMMON_30, COMMON_4, COMMON_5,
];

/// Month ones, small formal register. Index 0 holds 拾.
pub const DATE_FORMAL_ONES: [GlyphId; 10] = [
    DATE_FORMAL_10,
    DATE_FORMAL_1,
    DATE_FORMAL_2,
    DATE_FORMAL_3,
    DATE_FORMAL_4,
    DATE_FORMAL_5,
    DATE_FORMAL_6,
    DATE_FORMAL_7,
    DATE_FORMAL_8,
    DATE_FORMAL_9,
];

/// Day tens, small common register. Only 0..=3 occur.
pub const DATE_COMMON_TENS: [GlyphId; 4] = [
    GlyphId::BLANK,
    DATE_COMMON_10,
    DATE_COMMON_20,
    DATE_COMMON_30,
];

/// Day ones and weekdays, small common register. Index 0 holds 十.
pub const DATE_COMMON_ONES: [GlyphId; 10] = [
    DATE_COMMON_10,
    DATE_COMMON_1,
    DATE_COMMON_2,
    DATE_COMMON_3,
    DATE_COMMON_4,
    DATE_COMMON_5,
    DATE_COMMON_6,
    DATE_COMMON_7,
    DATE_COMMON_8,
    DATE_COMMON_9,
];

/// `(id, resource stem, ideograph)` for every non-blank glyph.
const CATALOG: [(GlyphId, &str, char); 52] = [
    (FORMAL_0, "u0", '零'),
    (FORMAL_1, "u1", '壹'),
    (FORMAL_2, "u2", '貳'),
    (FORMAL_3, "u3", '參'),
    (FORMAL_4, "u4", '肆'),
    (FORMAL_5, "u5", '伍'),
    (FORMAL_6, "u6", '陸'),
    (FORMAL_7, "u7", '柒'),
    (FORMAL_8, "u8", '捌'),
    (FORMAL_9, "u9", '玖'),
    (FORMAL_10, "u10", '拾'),
    (COMMON_0, "l0", '〇'),
    (COMMON_1, "l1", '一'),
    (COMMON_2, "l2", '二'),
    (COMMON_3, "l3", '三'),
    (COMMON_4, "l4", '四'),
    (COMMON_5, "l5", '五'),
    (COMMON_6, "l6", '六'),
    (COMMON_7, "l7", '七'),
    (COMMON_8, "l8", '八'),
    (COMMON_9, "l9", '九'),
    (COMMON_10, "l10", '十'),
    (COMMON_20, "l20", '廿'),
    (COMMON_30, "l30", '卅'),
    (POINT, "dian", '點'),
    (EXACT, "zheng", '整'),
    (HALF, "ban", '半'),
    (DATE_FORMAL_1, "su1", '壹'),
    (DATE_FORMAL_2, "su2", '貳'),
    (DATE_FORMAL_3, "su3", '參'),
    (DATE_FORMAL_4, "su4", '肆'),
    (DATE_FORMAL_5, "su5", '伍'),
    (DATE_FORMAL_6, "su6", '陸'),
    (DATE_FORMAL_7, "su7", '柒'),
    (DATE_FORMAL_8, "su8", '捌'),
    (DATE_FORMAL_9, "su9", '玖'),
    (DATE_FORMAL_10, "su10", '拾'),
    (DATE_COMMON_1, "sl1", '一'),
    (DATE_COMMON_2, "sl2", '二'),
    (DATE_COMMON_3, "sl3", '三'),
    (DATE_COMMON_4, "sl4", '四'),
    (DATE_COMMON_5, "sl5", '五'),
    (DATE_COMMON_6, "sl6", '六'),
    (DATE_COMMON_7, "sl7", '七'),
    (DATE_COMMON_8, "sl8", '八'),
    (DATE_COMMON_9, "sl9", '九'),
    (DATE_COMMON_10, "sl10", '十'),
    (DATE_COMMON_20, "sl20", '廿'),
    (DATE_COMMON_30, "sl30", '卅'),
    (LABEL_MONTH, "yue", '月'),
    (LABEL_DAY, "ri", '日'),
    (LABEL_WEEK, "zhou", '週'),
];

/// Resource file stem for a glyph (`"u1"`, `"sl20"`, …). `None` for blank or unknown ids.
pub fn glyph_stem(id: GlyphId) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(g, _, _)| *g == id)
        .map(|(_, stem, _)| *stem)
}

/// Reverse of [`glyph_stem`].
pub fn glyph_by_stem(stem: &str) -> Option<GlyphId> {
    CATALOG
        .iter()
        .find(|(_, s, _)| *s == stem)
        .map(|(g, _, _)| *g)
}

/// The ideograph a glyph depicts.
pub fn glyph_char(id: GlyphId) -> Option<char> {
    CATALOG
        .iter()
        .find(|(g, _, _)| *g == id)
        .map(|(_, _, ch)| *ch)
}

/// Every non-blank glyph id in catalog order.
pub fn all_glyphs() -> impl Iterator<Item = GlyphId> {
    CATALOG.iter().map(|(g, _, _)| *g)
}

/// Range-checked table access.
pub(crate) fn lookup(table: &[GlyphId], index: usize, table_name: &str) -> ClockResult<GlyphId> {
    table.get(index).copied().ok_or_else(|| {
        ClockError::invalid_input(format!(
            "{table_name} index {index} out of range (len {})",
            table.len()
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/tables.rs"]
mod tests;
