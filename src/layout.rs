/// Center `text` in a field `width` characters wide.
///
/// The left side gets half of the free space rounded down and any odd
/// leftover column goes after the text. Text that already fills the field
/// is returned unchanged, never truncated.
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }

    let pad = width - len;
    let left = pad / 2;
    let right = pad - left;

    let mut line = String::with_capacity(text.len() + pad);
    line.push_str(&" ".repeat(left));
    line.push_str(text);
    line.push_str(&" ".repeat(right));
    line
}
