// Built-in template table
// Rows: (device_model, system_version, app_version, lang_code, system_lang_code)

pub(super) type TemplateRow = (&'static str, &'static str, &'static str, &'static str, &'static str);

pub(super) const DESKTOP: [TemplateRow; 219] = [
    ("GA-EA790X-DS4", "10.0.22631", "4.16.4", "en", "en"),
    ("MS-7B86", "11.0.22000", "4.16.6", "en", "en"),
    ("B360M MORTAR", "10.0.19045", "4.16.8", "en", "en"),
    ("Z370P D3", "10.0.19044", "4.16.7", "zh", "zh-CN"),
    ("ThinkPad X1C 6th", "10.0.19043", "4.16.6", "es", "es"),
    ("XPS 13 9360", "10.0.19042", "4.16.5", "fr", "fr"),
    ("TUF B450M-PLUS", "10.0.19041", "4.16.4", "de", "de"),
    ("B550M PRO-VDH", "10.0.18363", "4.16.3", "ru", "ru"),
    ("Z490-A PRO", "10.0.18362", "4.16.2", "pt", "pt"),
    ("PRIME H310M-E", "10.0.17763", "4.16.1", "it", "it"),
    ("Legion Y7000P", "10.0.17134", "4.16.0", "ja", "ja"),
    ("EliteBook 840 G3", "10.0.16299", "4.15.9", "ko", "ko"),
    ("Inspiron 15-5570", "10.0.15063", "4.15.8", "ar", "ar"),
    ("ProDesk 400 G6", "10.0.14393", "4.15.7", "hi", "hi"),
    ("Aspire E5-575G", "10.0.19045.3803", "4.15.6", "tr", "tr"),
    ("ROG STRIX B550-F", "10.0.19044.3693", "4.15.5", "pl", "pl"),
    ("Predator G3-710", "10.0.19043.3570", "4.15.4", "nl", "nl"),
    ("IdeaPad 320-15IKB", "10.0.19042.3447", "4.15.3", "sv", "sv"),
    ("Latitude 7490", "10.0.19041.3324", "4.15.2", "da", "da"),
    ("ENVY 13-ad1xx", "10.0.18363.3201", "4.15.1", "no", "no"),
    ("Surface Pro 7", "10.0.18362.3078", "4.15.0", "fi", "fi"),
    ("MacBookPro15,2", "10.0.17763.2955", "4.14.9", "cs", "cs"),
    ("VivoBook S14 S4300", "10.0.17134.2832", "4.14.8", "hu", "hu"),
    ("Pavilion 15-cs0xxx", "10.0.16299.2709", "4.14.7", "ro", "ro"),
    ("Z590M-ITX/ax", "10.0.15063.2586", "4.14.6", "bg", "bg"),
    ("B460M DS3H", "10.0.14393.2463", "4.14.5", "sk", "sk"),
    ("H310M-HDV", "10.0.19045.3636", "4.14.4", "hr", "hr"),
    ("X570 AORUS ELITE", "10.0.19044.3513", "4.14.3", "sl", "sl"),
    ("Nitro AN515-54", "10.0.19043.3390", "4.14.2", "et", "et"),
    ("ThinkCentre M720q", "10.0.19042.3267", "4.14.1", "lv", "lv"),
    ("Yoga Slim 7-14IIL", "10.0.19041.3144", "4.14.0", "lt", "lt"),
    ("Swift 3 SF314-57", "10.0.18363.3021", "4.13.9", "uk", "uk"),
    ("MateBook D14", "10.0.18362.2898", "4.13.8", "be", "be"),
    ("MagicBook 14", "10.0.17763.2775", "4.13.7", "mk", "mk"),
    ("Vostro 3471", "10.0.17134.2652", "4.13.6", "sq", "sq"),
    ("ProBook 450 G7", "10.0.16299.2529", "4.13.5", "sr", "sr"),
    ("R7000-2020", "10.0.15063.2406", "4.13.4", "bs", "bs"),
    ("X299 UD4 PRO", "10.0.14393.2283", "4.13.3", "mt", "mt"),
    ("Z390 UD", "10.0.19045.3456", "4.13.2", "cy", "cy"),
    ("B365M D3H", "10.0.19044.3333", "4.13.1", "ga", "ga"),
    ("H410M S2H", "10.0.19043.3210", "4.13.0", "eu", "eu"),
    ("TUF GAMING B560M-PLUS", "10.0.19042.3087", "4.12.9", "ca", "ca"),
    ("ROG MAXIMUS XI HERO", "10.0.19041.2964", "4.12.8", "gl", "gl"),
    ("Z590-A PRO", "10.0.18363.2841", "4.12.7", "he", "he"),
    ("B450M DS3H", "10.0.18362.2718", "4.12.6", "th", "th"),
    ("X470 GAMING PLUS", "10.0.17763.2595", "4.12.5", "vi", "vi"),
    ("H81M-DS2", "10.0.17134.2472", "4.12.4", "id", "id"),
    ("B450M DS3H", "10.0.16299.2349", "4.12.3", "ms", "ms"),
    ("H81M-DS2", "10.0.15063.2226", "4.12.2", "tl", "tl"),
    ("B450M DS3H", "10.0.14393.2103", "4.12.1", "bn", "bn"),
    ("H81M-DS2", "10.0.19045.3276", "4.12.0", "ur", "ur"),
    ("B450M DS3H", "10.0.19044.3153", "4.11.9", "fa", "fa"),
    ("H81M-DS2", "10.0.19043.3030", "4.11.8", "ta", "ta"),
    ("MacBookPro16,1", "14.2.1", "10.5.2", "en", "en"),
    ("MacBookPro15,2", "14.2.0", "10.5.1", "zh", "zh-CN"),
    ("MacBookPro14,3", "14.1.2", "10.5.0", "es", "es"),
    ("MacBookPro13,3", "14.1.1", "10.4.9", "fr", "fr"),
    ("MacBookPro12,1", "14.1.0", "10.4.8", "de", "de"),
    ("MacBookAir10,1", "14.0.1", "10.4.7", "ru", "ru"),
    ("MacBookAir9,1", "14.0.0", "10.4.6", "pt", "pt"),
    ("MacBookAir8,2", "13.6.3", "10.4.5", "it", "it"),
    ("MacBookAir7,2", "13.6.2", "10.4.4", "ja", "ja"),
    ("MacBookAir6,2", "13.6.1", "10.4.3", "ko", "ko"),
    ("iMac21,1", "13.6.0", "10.4.2", "ar", "ar"),
    ("iMac20,2", "13.5.2", "10.4.1", "hi", "hi"),
    ("iMac19,2", "13.5.1", "10.4.0", "tr", "tr"),
    ("iMac18,3", "13.5.0", "10.3.9", "pl", "pl"),
    ("iMac17,1", "13.4.1", "10.3.8", "nl", "nl"),
    ("iMac16,2", "13.4.0", "10.3.7", "sv", "sv"),
    ("iMac15,1", "13.3.1", "10.3.6", "da", "da"),
    ("Macmini9,1", "13.3.0", "10.3.5", "no", "no"),
    ("Macmini8,1", "13.2.1", "10.3.4", "fi", "fi"),
    ("Macmini7,1", "13.2.0", "10.3.3", "cs", "cs"),
    ("MacPro7,1", "13.1.1", "10.3.2", "hu", "hu"),
    ("MacPro6,1", "13.1.0", "10.3.1", "ro", "ro"),
    ("MacPro5,1", "13.0.1", "10.3.0", "bg", "bg"),
    ("MacPro4,1", "13.0.0", "10.2.9", "sk", "sk"),
    ("MacStudio1,1", "12.7.2", "10.2.8", "hr", "hr"),
    ("MacStudio1,2", "12.7.1", "10.2.7", "sl", "sl"),
    ("MacBook10,1", "12.7.0", "10.2.6", "et", "et"),
    ("MacBook9,1", "12.6.9", "10.2.5", "lv", "lv"),
    ("MacBook8,1", "12.6.8", "10.2.4", "lt", "lt"),
    ("MacBook7,1", "12.6.7", "10.2.3", "uk", "uk"),
    ("MacBook6,1", "12.6.6", "10.2.2", "be", "be"),
    ("MacBook5,2", "12.6.5", "10.2.1", "mk", "mk"),
    ("MacBook5,1", "12.6.4", "10.2.0", "sq", "sq"),
    ("MacBook4,1", "12.6.3", "10.1.9", "sr", "sr"),
    ("MacBook3,1", "12.6.2", "10.1.8", "bs", "bs"),
    ("MacBook2,1", "12.6.1", "10.1.7", "mt", "mt"),
    ("MacBook1,1", "12.6.0", "10.1.6", "cy", "cy"),
    ("iMac14,2", "12.5.1", "10.1.5", "ga", "ga"),
    ("iMac13,2", "12.5.0", "10.1.4", "eu", "eu"),
    ("iMac12,1", "12.4.1", "10.1.3", "ca", "ca"),
    ("iMac11,3", "12.4.0", "10.1.2", "gl", "gl"),
    ("iMac10,1", "12.3.1", "10.1.1", "he", "he"),
    ("iMac9,1", "12.3.0", "10.1.0", "th", "th"),
    ("iMac8,1", "12.2.1", "10.0.9", "vi", "vi"),
    ("iMac7,1", "12.2.0", "10.0.8", "id", "id"),
    ("iMac6,1", "12.1.1", "10.0.7", "ms", "ms"),
    ("iMac5,2", "12.1.0", "10.0.6", "tl", "tl"),
    ("iMac4,2", "12.0.1", "10.0.5", "bn", "bn"),
    ("iMac4,1", "12.0.0", "10.0.4", "ur", "ur"),
    ("iMac3,6", "11.7.10", "10.0.3", "fa", "fa"),
    ("iMac3,4", "11.7.9", "10.0.2", "ta", "ta"),
    ("iMac3,2", "11.7.8", "10.0.1", "te", "te"),
    ("iMac3,1", "11.7.7", "10.0.0", "ml", "ml"),
    ("MacBookPro11,5", "11.7.6", "10.0.9", "en", "en"),
    ("MacBookPro10,2", "11.7.5", "10.0.8", "zh", "zh-CN"),
    ("MacBookPro9,2", "11.7.4", "10.0.7", "es", "es"),
    ("MacBookPro8,3", "11.7.3", "10.0.6", "fr", "fr"),
    ("MacBookPro7,1", "11.7.2", "10.0.5", "de", "de"),
    ("MacBookPro6,2", "11.7.1", "10.0.4", "ru", "ru"),
    ("MacBookPro5,5", "11.7.0", "10.0.3", "pt", "pt"),
    ("MacBookPro4,1", "11.6.9", "10.0.2", "it", "it"),
    ("MacBookPro3,1", "11.6.8", "10.0.1", "ja", "ja"),
    ("MacBookPro2,2", "11.6.7", "10.0.0", "ko", "ko"),
    ("MacBookPro1,1", "11.6.6", "10.0.9", "ar", "ar"),
    ("MacBookAir7,1", "11.6.5", "10.0.8", "hi", "hi"),
    ("MacBookAir6,1", "11.6.4", "10.0.7", "tr", "tr"),
    ("MacBookAir5,2", "11.6.3", "10.0.6", "pl", "pl"),
    ("MacBookAir4,2", "11.6.2", "10.0.5", "nl", "nl"),
    ("MacBookAir3,2", "11.6.1", "10.0.4", "sv", "sv"),
    ("MacBookAir2,1", "11.6.0", "10.0.3", "da", "da"),
    ("MacBookAir1,1", "11.5.2", "10.0.2", "no", "no"),
    ("iMac12,2", "11.5.1", "10.0.1", "fi", "fi"),
    ("iMac11,2", "11.5.0", "10.0.0", "cs", "cs"),
    ("iMac10,2", "11.4.9", "10.0.9", "hu", "hu"),
    ("iMac9,2", "11.4.8", "10.0.8", "ro", "ro"),
    ("iMac8,2", "11.4.7", "10.0.7", "bg", "bg"),
    ("iMac7,2", "11.4.6", "10.0.6", "sk", "sk"),
    ("iMac6,2", "11.4.5", "10.0.5", "hr", "hr"),
    ("iMac5,1", "11.4.4", "10.0.4", "sl", "sl"),
    ("iMac4,1", "11.4.3", "10.0.3", "et", "et"),
    ("iMac3,1", "11.4.2", "10.0.2", "lv", "lv"),
    ("iMac2,1", "11.4.1", "10.0.1", "lt", "lt"),
    ("iMac1,1", "11.4.0", "10.0.0", "uk", "uk"),
    ("MacBookPro16,1", "14.2.1", "10.5.2", "en", "en"),
    ("MacBookPro15,2", "14.2.0", "10.5.1", "zh", "zh-CN"),
    ("MacBookPro14,3", "14.1.2", "10.5.0", "es", "es"),
    ("MacBookPro13,3", "14.1.1", "10.4.9", "fr", "fr"),
    ("MacBookPro12,1", "14.1.0", "10.4.8", "de", "de"),
    ("MacBookAir10,1", "14.0.1", "10.4.7", "ru", "ru"),
    ("MacBookAir9,1", "14.0.0", "10.4.6", "pt", "pt"),
    ("MacBookAir8,2", "13.6.3", "10.4.5", "it", "it"),
    ("MacBookAir7,2", "13.6.2", "10.4.4", "ja", "ja"),
    ("MacBookAir6,2", "13.6.1", "10.4.3", "ko", "ko"),
    ("iMac21,1", "13.6.0", "10.4.2", "ar", "ar"),
    ("iMac20,2", "13.5.2", "10.4.1", "hi", "hi"),
    ("iMac19,2", "13.5.1", "10.4.0", "tr", "tr"),
    ("iMac18,3", "13.5.0", "10.3.9", "pl", "pl"),
    ("iMac17,1", "13.4.1", "10.3.8", "nl", "nl"),
    ("iMac16,2", "13.4.0", "10.3.7", "sv", "sv"),
    ("iMac15,1", "13.3.1", "10.3.6", "da", "da"),
    ("Macmini9,1", "13.3.0", "10.3.5", "no", "no"),
    ("Macmini8,1", "13.2.1", "10.3.4", "fi", "fi"),
    ("Macmini7,1", "13.2.0", "10.3.3", "cs", "cs"),
    ("MacPro7,1", "13.1.1", "10.3.2", "hu", "hu"),
    ("MacPro6,1", "13.1.0", "10.3.1", "ro", "ro"),
    ("MacPro5,1", "13.0.1", "10.3.0", "bg", "bg"),
    ("MacPro4,1", "13.0.0", "10.2.9", "sk", "sk"),
    ("MacStudio1,1", "12.7.2", "10.2.8", "hr", "hr"),
    ("MacStudio1,2", "12.7.1", "10.2.7", "sl", "sl"),
    ("MacBook10,1", "12.7.0", "10.2.6", "et", "et"),
    ("MacBook9,1", "12.6.9", "10.2.5", "lv", "lv"),
    ("MacBook8,1", "12.6.8", "10.2.4", "lt", "lt"),
    ("MacBook7,1", "12.6.7", "10.2.3", "uk", "uk"),
    ("MacBook6,1", "12.6.6", "10.2.2", "be", "be"),
    ("MacBook5,2", "12.6.5", "10.2.1", "mk", "mk"),
    ("MacBook5,1", "12.6.4", "10.2.0", "sq", "sq"),
    ("MacBook4,1", "12.6.3", "10.1.9", "sr", "sr"),
    ("MacBook3,1", "12.6.2", "10.1.8", "bs", "bs"),
    ("MacBook2,1", "12.6.1", "10.1.7", "mt", "mt"),
    ("MacBook1,1", "12.6.0", "10.1.6", "cy", "cy"),
    ("iMac14,2", "12.5.1", "10.1.5", "ga", "ga"),
    ("iMac13,2", "12.5.0", "10.1.4", "eu", "eu"),
    ("iMac12,1", "12.4.1", "10.1.3", "ca", "ca"),
    ("iMac11,3", "12.4.0", "10.1.2", "gl", "gl"),
    ("iMac10,1", "12.3.1", "10.1.1", "he", "he"),
    ("iMac9,1", "12.3.0", "10.1.0", "th", "th"),
    ("iMac8,1", "12.2.1", "10.0.9", "vi", "vi"),
    ("iMac7,1", "12.2.0", "10.0.8", "id", "id"),
    ("iMac6,1", "12.1.1", "10.0.7", "ms", "ms"),
    ("iMac5,2", "12.1.0", "10.0.6", "tl", "tl"),
    ("iMac4,2", "12.0.1", "10.0.5", "bn", "bn"),
    ("iMac4,1", "12.0.0", "10.0.4", "ur", "ur"),
    ("iMac3,6", "11.7.10", "10.0.3", "fa", "fa"),
    ("iMac3,4", "11.7.9", "10.0.2", "ta", "ta"),
    ("iMac3,2", "11.7.8", "10.0.1", "te", "te"),
    ("iMac3,1", "11.7.7", "10.0.0", "ml", "ml"),
    ("MacBookPro11,5", "11.7.6", "10.0.9", "en", "en"),
    ("MacBookPro10,2", "11.7.5", "10.0.8", "zh", "zh-CN"),
    ("MacBookPro9,2", "11.7.4", "10.0.7", "es", "es"),
    ("MacBookPro8,3", "11.7.3", "10.0.6", "fr", "fr"),
    ("MacBookPro7,1", "11.7.2", "10.0.5", "de", "de"),
    ("MacBookPro6,2", "11.7.1", "10.0.4", "ru", "ru"),
    ("MacBookPro5,5", "11.7.0", "10.0.3", "pt", "pt"),
    ("MacBookPro4,1", "11.6.9", "10.0.2", "it", "it"),
    ("MacBookPro3,1", "11.6.8", "10.0.1", "ja", "ja"),
    ("MacBookPro2,2", "11.6.7", "10.0.0", "ko", "ko"),
    ("MacBookPro1,1", "11.6.6", "10.0.9", "ar", "ar"),
    ("MacBookAir7,1", "11.6.5", "10.0.8", "hi", "hi"),
    ("MacBookAir6,1", "11.6.4", "10.0.7", "tr", "tr"),
    ("MacBookAir5,2", "11.6.3", "10.0.6", "pl", "pl"),
    ("MacBookAir4,2", "11.6.2", "10.0.5", "nl", "nl"),
    ("MacBookAir3,2", "11.6.1", "10.0.4", "sv", "sv"),
    ("MacBookAir2,1", "11.6.0", "10.0.3", "da", "da"),
    ("MacBookAir1,1", "11.5.2", "10.0.2", "no", "no"),
    ("iMac12,2", "11.5.1", "10.0.1", "fi", "fi"),
    ("iMac11,2", "11.5.0", "10.0.0", "cs", "cs"),
    ("iMac10,2", "11.4.9", "10.0.9", "hu", "hu"),
    ("iMac9,2", "11.4.8", "10.0.8", "ro", "ro"),
    ("iMac8,2", "11.4.7", "10.0.7", "bg", "bg"),
    ("iMac7,2", "11.4.6", "10.0.6", "sk", "sk"),
    ("iMac6,2", "11.4.5", "10.0.5", "hr", "hr"),
    ("iMac5,1", "11.4.4", "10.0.4", "sl", "sl"),
    ("iMac4,1", "11.4.3", "10.0.3", "et", "et"),
    ("iMac3,1", "11.4.2", "10.0.2", "lv", "lv"),
    ("iMac2,1", "11.4.1", "10.0.1", "lt", "lt"),
    ("iMac1,1", "11.4.0", "10.0.0", "uk", "uk"),
];

pub(super) const MOBILE_ANDROID: [TemplateRow; 19] = [
    ("Samsung Galaxy S24 Ultra", "14", "10.14.5", "en", "en"),
    ("Samsung Galaxy S23", "13", "10.14.3", "en", "en"),
    ("Samsung Galaxy Note20", "12", "10.13.8", "en", "en"),
    ("Samsung Galaxy A54", "13", "10.14.2", "en", "en"),
    ("Samsung Galaxy S22", "13", "10.14.1", "en", "en"),
    ("Xiaomi 14 Pro", "14", "10.14.4", "en", "en"),
    ("Xiaomi 13", "13", "10.14.0", "en", "en"),
    ("Redmi Note 13 Pro", "13", "10.13.9", "en", "en"),
    ("POCO F5 Pro", "13", "10.13.7", "en", "en"),
    ("OnePlus 12", "14", "10.14.6", "en", "en"),
    ("OnePlus 11", "13", "10.14.2", "en", "en"),
    ("Pixel 8 Pro", "14", "10.14.7", "en", "en"),
    ("Pixel 7a", "13", "10.14.1", "en", "en"),
    ("HUAWEI P60 Pro", "13", "10.13.8", "en", "en"),
    ("HUAWEI Mate 50", "12", "10.13.5", "en", "en"),
    ("OPPO Find X6 Pro", "13", "10.14.0", "en", "en"),
    ("OPPO Reno10 Pro", "13", "10.13.9", "en", "en"),
    ("vivo X100 Pro", "14", "10.14.3", "en", "en"),
    ("vivo V29e", "13", "10.13.8", "en", "en"),
];

pub(super) const MOBILE_IOS: [TemplateRow; 16] = [
    ("iPhone 15 Pro Max", "17.2.1", "10.5.2", "en", "en"),
    ("iPhone 15 Pro", "17.2.0", "10.5.1", "en", "en"),
    ("iPhone 15", "17.1.2", "10.5.0", "en", "en"),
    ("iPhone 14 Pro Max", "16.7.2", "10.4.8", "en", "en"),
    ("iPhone 14 Pro", "16.7.1", "10.4.7", "en", "en"),
    ("iPhone 14", "16.6.1", "10.4.6", "en", "en"),
    ("iPhone 13 Pro Max", "16.6.0", "10.4.5", "en", "en"),
    ("iPhone 13 Pro", "16.5.1", "10.4.4", "en", "en"),
    ("iPhone 13", "16.5.0", "10.4.3", "en", "en"),
    ("iPhone 13 mini", "16.4.1", "10.4.2", "en", "en"),
    ("iPhone 12 Pro Max", "16.4.0", "10.4.1", "en", "en"),
    ("iPhone 12 Pro", "16.3.1", "10.4.0", "en", "en"),
    ("iPhone 12", "16.3.0", "10.3.9", "en", "en"),
    ("iPhone SE (3rd generation)", "16.2.1", "10.3.8", "en", "en"),
    ("iPad Pro 12.9-inch (6th generation)", "17.1.1", "10.5.0", "en", "en"),
    ("iPad Air (5th generation)", "17.0.3", "10.4.9", "en", "en"),
];
