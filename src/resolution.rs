// resolution.rs - 文件名中的分辨率标记匹配
// 壁纸文件名里嵌有形如 `640x480` 的标记，按字符串原样比较，不做数值归一化

/// 取出文件名中第一个 `数字x数字` 形式的标记
///
/// 等价于正则 `\d+x\d+` 的最左匹配（仅 ASCII 数字，小写 x），
/// 末尾的数字串尽量长
pub fn find_token(name: &str) -> Option<&str> {
    let bytes = name.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        // 一段连续数字 [start, x_pos)
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let x_pos = i;

        if bytes.get(x_pos) == Some(&b'x')
            && bytes.get(x_pos + 1).is_some_and(u8::is_ascii_digit)
        {
            let mut end = x_pos + 1;
            while end < bytes.len() && bytes[end].is_ascii_digit() {
                end += 1;
            }
            return Some(&name[start..end]);
        }
    }

    None
}

/// 文件名的分辨率标记是否与目标完全一致
///
/// 没有标记时一律不匹配
pub fn matches(name: &str, target: &str) -> bool {
    find_token(name) == Some(target)
}
