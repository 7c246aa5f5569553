//! User-facing form copy, per language.

use vitrine_i18n::Language;

pub fn name_invalid(language: Language) -> &'static str {
    match language {
        Language::En => "Please enter a valid name (at least 2 characters)",
        Language::Ar => "يرجى إدخال اسم صحيح (حرفان على الأقل)",
    }
}

pub fn email_invalid(language: Language) -> &'static str {
    match language {
        Language::En => "Please enter a valid email address",
        Language::Ar => "يرجى إدخال عنوان بريد إلكتروني صحيح",
    }
}

pub fn consent_required(language: Language) -> &'static str {
    match language {
        Language::En => "Please agree to receive updates.",
        Language::Ar => "يرجى الموافقة على تلقي التحديثات.",
    }
}

pub fn subscribing(language: Language) -> &'static str {
    match language {
        Language::En => "Subscribing...",
        Language::Ar => "جاري الاشتراك...",
    }
}

pub fn subscribed(language: Language) -> &'static str {
    match language {
        Language::En => "Thank you for subscribing! Check your email for confirmation.",
        Language::Ar => "شكراً لك على الاشتراك! تحقق من بريدك الإلكتروني للتأكيد.",
    }
}

pub fn submission_failed(language: Language) -> &'static str {
    match language {
        Language::En => "Something went wrong. Please try again later.",
        Language::Ar => "حدث خطأ ما. يرجى المحاولة مرة أخرى لاحقاً.",
    }
}
