//! Static directory of Vietnamese banks with their VietQR BIN codes.
//!
//! The studio's bank picker searches this list; the public page uses the
//! BIN to render a VietQR gift block.

/// One entry in the bank directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bank {
    pub short_name: &'static str,
    pub full_name: &'static str,
    /// VietQR acquirer BIN.
    pub bin: &'static str,
    /// Extra names hosts type in practice (old brands, abbreviations).
    pub aliases: &'static [&'static str],
}

pub const BANKS: &[Bank] = &[
    Bank { short_name: "Vietcombank", full_name: "Ngân hàng TMCP Ngoại thương Việt Nam", bin: "970436", aliases: &["VCB"] },
    Bank { short_name: "VietinBank", full_name: "Ngân hàng TMCP Công thương Việt Nam", bin: "970415", aliases: &["CTG", "ICB"] },
    Bank { short_name: "BIDV", full_name: "Ngân hàng TMCP Đầu tư và Phát triển Việt Nam", bin: "970418", aliases: &[] },
    Bank { short_name: "Agribank", full_name: "Ngân hàng Nông nghiệp và Phát triển Nông thôn Việt Nam", bin: "970405", aliases: &["VBA"] },
    Bank { short_name: "Techcombank", full_name: "Ngân hàng TMCP Kỹ thương Việt Nam", bin: "970407", aliases: &["TCB"] },
    Bank { short_name: "MB Bank", full_name: "Ngân hàng TMCP Quân đội", bin: "970422", aliases: &["MBB", "MB"] },
    Bank { short_name: "ACB", full_name: "Ngân hàng TMCP Á Châu", bin: "970416", aliases: &[] },
    Bank { short_name: "VPBank", full_name: "Ngân hàng TMCP Việt Nam Thịnh Vượng", bin: "970432", aliases: &["VPB"] },
    Bank { short_name: "Sacombank", full_name: "Ngân hàng TMCP Sài Gòn Thương Tín", bin: "970403", aliases: &["STB"] },
    Bank { short_name: "TPBank", full_name: "Ngân hàng TMCP Tiên Phong", bin: "970423", aliases: &["TPB", "TienPhongBank"] },
    Bank { short_name: "VIB", full_name: "Ngân hàng TMCP Quốc tế Việt Nam", bin: "970441", aliases: &[] },
    Bank { short_name: "SHB", full_name: "Ngân hàng TMCP Sài Gòn - Hà Nội", bin: "970443", aliases: &[] },
    Bank { short_name: "HDBank", full_name: "Ngân hàng TMCP Phát triển TP. Hồ Chí Minh", bin: "970437", aliases: &["HDB"] },
    Bank { short_name: "MSB", full_name: "Ngân hàng TMCP Hàng Hải Việt Nam", bin: "970426", aliases: &["Maritime Bank"] },
    Bank { short_name: "OCB", full_name: "Ngân hàng TMCP Phương Đông", bin: "970448", aliases: &[] },
    Bank { short_name: "Eximbank", full_name: "Ngân hàng TMCP Xuất nhập khẩu Việt Nam", bin: "970431", aliases: &["EIB"] },
    Bank { short_name: "SeABank", full_name: "Ngân hàng TMCP Đông Nam Á", bin: "970440", aliases: &[] },
    Bank { short_name: "LPBank", full_name: "Ngân hàng TMCP Lộc Phát Việt Nam", bin: "970449", aliases: &["LienVietPostBank", "LPB"] },
    Bank { short_name: "DongA Bank", full_name: "Ngân hàng TMCP Đông Á", bin: "970406", aliases: &["DAB"] },
    Bank { short_name: "BacA Bank", full_name: "Ngân hàng TMCP Bắc Á", bin: "970409", aliases: &["BAB"] },
    Bank { short_name: "PVcomBank", full_name: "Ngân hàng TMCP Đại Chúng Việt Nam", bin: "970412", aliases: &[] },
    Bank { short_name: "SCB", full_name: "Ngân hàng TMCP Sài Gòn", bin: "970429", aliases: &[] },
    Bank { short_name: "ABBANK", full_name: "Ngân hàng TMCP An Bình", bin: "970425", aliases: &["ABB"] },
    Bank { short_name: "Nam A Bank", full_name: "Ngân hàng TMCP Nam Á", bin: "970428", aliases: &["NAB"] },
    Bank { short_name: "KienlongBank", full_name: "Ngân hàng TMCP Kiên Long", bin: "970452", aliases: &["KLB"] },
    Bank { short_name: "VietBank", full_name: "Ngân hàng TMCP Việt Nam Thương Tín", bin: "970433", aliases: &["VBB"] },
    Bank { short_name: "BaoViet Bank", full_name: "Ngân hàng TMCP Bảo Việt", bin: "970438", aliases: &["BVB"] },
    Bank { short_name: "Saigonbank", full_name: "Ngân hàng TMCP Sài Gòn Công Thương", bin: "970400", aliases: &["SGICB"] },
];

/// Lowercases and strips Vietnamese diacritics so `Đông Á` matches `dong a`.
pub fn fold_diacritics(input: &str) -> String {
    input.chars().flat_map(char::to_lowercase).map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ'
        | 'ẩ' | 'ẫ' | 'ậ' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ'
        | 'ở' | 'ỡ' | 'ợ' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' => 'd',
        _ => c,
    }
}

pub fn lookup_by_bin(bin: &str) -> Option<&'static Bank> {
    BANKS.iter().find(|b| b.bin == bin)
}

/// Diacritic- and case-insensitive substring search over short name, full
/// name and aliases. An empty or whitespace query returns the whole list.
pub fn search(query: &str) -> Vec<&'static Bank> {
    let needle = fold_diacritics(query.trim());
    if needle.is_empty() {
        return BANKS.iter().collect();
    }
    BANKS
        .iter()
        .filter(|bank| {
            fold_diacritics(bank.short_name).contains(&needle)
                || fold_diacritics(bank.full_name).contains(&needle)
                || bank
                    .aliases
                    .iter()
                    .any(|alias| fold_diacritics(alias).contains(&needle))
        })
        .collect()
}
