//! Static issuer tables.
//!
//! Shetab BINs share their first four digits between issuers, so each
//! four-digit key lists its candidates in detection priority order.

use super::BankInfo;

/// BIN table keyed by four-digit prefix. Sorted for binary search.
pub(super) static BANK_BINS: &[(&str, &[BankInfo])] = &[
    (
        "5022",
        &[
            BankInfo {
                bank: "Pasargad",
                bank_fa: "پاسارگاد",
                prefixes: &["5022-29"],
                logo: Some("/banks/pasargad.svg"),
            },
        ],
    ),
    (
        "5028",
        &[
            BankInfo {
                bank: "Shahr",
                bank_fa: "شهر",
                prefixes: &["5028-06"],
                logo: Some("/banks/shahr.svg"),
            },
        ],
    ),
    (
        "5029",
        &[
            BankInfo {
                bank: "Tosee Taavon",
                bank_fa: "توسعه تعاون",
                prefixes: &["5029-08"],
                logo: Some("/banks/tosee-taavon.svg"),
            },
            BankInfo {
                bank: "Karafarin",
                bank_fa: "کارآفرین",
                prefixes: &["5029-10"],
                logo: Some("/banks/karafarin.svg"),
            },
            BankInfo {
                bank: "Dey",
                bank_fa: "دی",
                prefixes: &["5029-38"],
                logo: Some("/banks/dey.svg"),
            },
        ],
    ),
    (
        "5041",
        &[
            BankInfo {
                bank: "Resalat",
                bank_fa: "رسالت",
                prefixes: &["5041-72"],
                logo: Some("/banks/resalat.svg"),
            },
        ],
    ),
    (
        "5047",
        &[
            BankInfo {
                bank: "Shahr",
                bank_fa: "شهر",
                prefixes: &["5047-06"],
                logo: Some("/banks/shahr.svg"),
            },
        ],
    ),
    (
        "5054",
        &[
            BankInfo {
                bank: "Gardeshgari",
                bank_fa: "گردشگری",
                prefixes: &["5054-16"],
                logo: Some("/banks/gardeshgari.svg"),
            },
        ],
    ),
    (
        "5057",
        &[
            BankInfo {
                bank: "Iran Zamin",
                bank_fa: "ایران زمین",
                prefixes: &["5057-85"],
                logo: Some("/banks/iran-zamin.svg"),
            },
        ],
    ),
    (
        "5058",
        &[
            BankInfo {
                bank: "Kowsar",
                bank_fa: "کوثر",
                prefixes: &["5058-01"],
                logo: None,
            },
        ],
    ),
    (
        "5076",
        &[
            BankInfo {
                bank: "Noor",
                bank_fa: "نور",
                prefixes: &["5076-77"],
                logo: None,
            },
        ],
    ),
    (
        "5859",
        &[
            BankInfo {
                bank: "Tejarat",
                bank_fa: "تجارت",
                prefixes: &["5859-83"],
                logo: Some("/banks/tejarat.svg"),
            },
            BankInfo {
                bank: "Khavarmianeh",
                bank_fa: "خاورمیانه",
                prefixes: &["5859-47"],
                logo: Some("/banks/khavarmianeh.svg"),
            },
        ],
    ),
    (
        "5892",
        &[
            BankInfo {
                bank: "Sepah",
                bank_fa: "سپه",
                prefixes: &["5892-10"],
                logo: Some("/banks/sepah.svg"),
            },
        ],
    ),
    (
        "5894",
        &[
            BankInfo {
                bank: "Refah",
                bank_fa: "رفاه کارگران",
                prefixes: &["5894-63"],
                logo: Some("/banks/refah.svg"),
            },
        ],
    ),
    (
        "6037",
        &[
            BankInfo {
                bank: "Melli",
                bank_fa: "ملی",
                prefixes: &["6037-99"],
                logo: Some("/banks/melli.svg"),
            },
            BankInfo {
                bank: "Saderat",
                bank_fa: "صادرات",
                prefixes: &["6037-69"],
                logo: Some("/banks/saderat.svg"),
            },
            BankInfo {
                bank: "Keshavarzi",
                bank_fa: "کشاورزی",
                prefixes: &["6037-70"],
                logo: Some("/banks/keshavarzi.svg"),
            },
        ],
    ),
    (
        "6062",
        &[
            BankInfo {
                bank: "Melal",
                bank_fa: "ملل",
                prefixes: &["6062-56"],
                logo: Some("/banks/melal.svg"),
            },
        ],
    ),
    (
        "6063",
        &[
            BankInfo {
                bank: "Mehr Iran",
                bank_fa: "قرض‌الحسنه مهر ایران",
                prefixes: &["6063-73"],
                logo: Some("/banks/mehr-iran.svg"),
            },
        ],
    ),
    (
        "6104",
        &[
            BankInfo {
                bank: "Mellat",
                bank_fa: "ملت",
                prefixes: &["6104-33"],
                logo: Some("/banks/mellat.svg"),
            },
        ],
    ),
    (
        "6219",
        &[
            BankInfo {
                bank: "Saman",
                bank_fa: "سامان",
                prefixes: &["6219-86"],
                logo: Some("/banks/saman.svg"),
            },
        ],
    ),
    (
        "6221",
        &[
            BankInfo {
                bank: "Parsian",
                bank_fa: "پارسیان",
                prefixes: &["6221-06"],
                logo: Some("/banks/parsian.svg"),
            },
        ],
    ),
    (
        "6273",
        &[
            BankInfo {
                bank: "Tejarat",
                bank_fa: "تجارت",
                prefixes: &["6273-53"],
                logo: Some("/banks/tejarat.svg"),
            },
            BankInfo {
                bank: "Ansar",
                bank_fa: "انصار",
                prefixes: &["6273-81"],
                logo: None,
            },
        ],
    ),
    (
        "6274",
        &[
            BankInfo {
                bank: "Eghtesad Novin",
                bank_fa: "اقتصاد نوین",
                prefixes: &["6274-12"],
                logo: Some("/banks/eghtesad-novin.svg"),
            },
            BankInfo {
                bank: "Karafarin",
                bank_fa: "کارآفرین",
                prefixes: &["6274-88"],
                logo: Some("/banks/karafarin.svg"),
            },
        ],
    ),
    (
        "6276",
        &[
            BankInfo {
                bank: "Tosee Saderat",
                bank_fa: "توسعه صادرات",
                prefixes: &["6276-48"],
                logo: Some("/banks/tosee-saderat.svg"),
            },
        ],
    ),
    (
        "6277",
        &[
            BankInfo {
                bank: "Post Bank",
                bank_fa: "پست بانک",
                prefixes: &["6277-60"],
                logo: Some("/banks/post-bank.svg"),
            },
        ],
    ),
    (
        "6278",
        &[
            BankInfo {
                bank: "Parsian",
                bank_fa: "پارسیان",
                prefixes: &["6278-84"],
                logo: Some("/banks/parsian.svg"),
            },
        ],
    ),
    (
        "6279",
        &[
            BankInfo {
                bank: "Sanat va Madan",
                bank_fa: "صنعت و معدن",
                prefixes: &["6279-61"],
                logo: Some("/banks/sanat-madan.svg"),
            },
        ],
    ),
    (
        "6280",
        &[
            BankInfo {
                bank: "Maskan",
                bank_fa: "مسکن",
                prefixes: &["6280-23"],
                logo: Some("/banks/maskan.svg"),
            },
        ],
    ),
    (
        "6281",
        &[
            BankInfo {
                bank: "Etebari Tosee",
                bank_fa: "اعتباری توسعه",
                prefixes: &["6281-57"],
                logo: None,
            },
        ],
    ),
    (
        "6362",
        &[
            BankInfo {
                bank: "Ayandeh",
                bank_fa: "آینده",
                prefixes: &["6362-14"],
                logo: Some("/banks/ayandeh.svg"),
            },
        ],
    ),
    (
        "6367",
        &[
            BankInfo {
                bank: "Markazi",
                bank_fa: "مرکزی",
                prefixes: &["6367-95"],
                logo: Some("/banks/markazi.svg"),
            },
        ],
    ),
    (
        "6369",
        &[
            BankInfo {
                bank: "Hekmat Iranian",
                bank_fa: "حکمت ایرانیان",
                prefixes: &["6369-49"],
                logo: None,
            },
        ],
    ),
    (
        "6391",
        &[
            BankInfo {
                bank: "Parsian",
                bank_fa: "پارسیان",
                prefixes: &["6391-94"],
                logo: Some("/banks/parsian.svg"),
            },
        ],
    ),
    (
        "6392",
        &[
            BankInfo {
                bank: "Keshavarzi",
                bank_fa: "کشاورزی",
                prefixes: &["6392-17"],
                logo: Some("/banks/keshavarzi.svg"),
            },
        ],
    ),
    (
        "6393",
        &[
            BankInfo {
                bank: "Sina",
                bank_fa: "سینا",
                prefixes: &["6393-46"],
                logo: Some("/banks/sina.svg"),
            },
            BankInfo {
                bank: "Pasargad",
                bank_fa: "پاسارگاد",
                prefixes: &["6393-47"],
                logo: Some("/banks/pasargad.svg"),
            },
            BankInfo {
                bank: "Mehr Eghtesad",
                bank_fa: "مهر اقتصاد",
                prefixes: &["6393-70"],
                logo: None,
            },
        ],
    ),
    (
        "6395",
        &[
            BankInfo {
                bank: "Ghavamin",
                bank_fa: "قوامین",
                prefixes: &["6395-99"],
                logo: None,
            },
        ],
    ),
    (
        "6396",
        &[
            BankInfo {
                bank: "Sarmayeh",
                bank_fa: "سرمایه",
                prefixes: &["6396-07"],
                logo: Some("/banks/sarmayeh.svg"),
            },
        ],
    ),
    (
        "9919",
        &[
            BankInfo {
                bank: "Mellat",
                bank_fa: "ملت",
                prefixes: &["9919-75"],
                logo: Some("/banks/mellat.svg"),
            },
        ],
    ),
];

/// IBAN bank codes (the three digits after `IRkk`). Sorted for binary search.
pub(super) static IBAN_BANK_CODES: &[(&str, &str)] = &[
    ("010", "Markazi"),
    ("011", "Sanat va Madan"),
    ("012", "Mellat"),
    ("013", "Refah"),
    ("014", "Maskan"),
    ("015", "Sepah"),
    ("016", "Keshavarzi"),
    ("017", "Melli"),
    ("018", "Tejarat"),
    ("019", "Saderat"),
    ("020", "Tosee Saderat"),
    ("021", "Post Bank"),
    ("022", "Tosee Taavon"),
    ("051", "Etebari Tosee"),
    ("052", "Ghavamin"),
    ("053", "Karafarin"),
    ("054", "Parsian"),
    ("055", "Eghtesad Novin"),
    ("056", "Saman"),
    ("057", "Pasargad"),
    ("058", "Sarmayeh"),
    ("059", "Sina"),
    ("060", "Mehr Iran"),
    ("061", "Shahr"),
    ("062", "Ayandeh"),
    ("063", "Ansar"),
    ("064", "Gardeshgari"),
    ("065", "Hekmat Iranian"),
    ("066", "Dey"),
    ("069", "Iran Zamin"),
    ("070", "Resalat"),
    ("073", "Kowsar"),
    ("075", "Melal"),
    ("078", "Khavarmianeh"),
    ("079", "Mehr Eghtesad"),
    ("080", "Noor"),
];
