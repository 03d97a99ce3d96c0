//! Partially localized reply tables.
//!
//! Localization coverage is deliberately uneven and the engine does not
//! hide it: Hindi and Marathi carry a small per-topic subset, the other
//! declared languages carry only the welcome and the default reply. Any
//! topic without a translated string falls back to English.

use aidconnect_core::Language;

use super::Topic;

/// How the engine handles the uneven translation tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocalizationPolicy {
    /// Serve the translated string where one exists, English otherwise.
    /// Mixed-language conversations are expected and documented.
    #[default]
    Faithful,
    /// Serve English for every reply regardless of the chosen language.
    EnglishFallback,
}

/// The localized reply for a topic, if the table carries one.
#[must_use]
pub fn localized_reply(
    topic: Topic,
    language: Language,
    policy: LocalizationPolicy,
) -> Option<&'static str> {
    if policy == LocalizationPolicy::EnglishFallback {
        return None;
    }
    match language {
        Language::En => None,
        Language::Hi => hindi_reply(topic),
        Language::Mr => marathi_reply(topic),
        // Single-string coverage: only the default reply is translated.
        Language::Te | Language::Ml | Language::Ta | Language::Bn | Language::Or => {
            (topic == Topic::CapabilityOverview).then(|| default_reply(language))
        }
    }
}

/// The localized visitor welcome, if the table carries one.
#[must_use]
pub fn localized_welcome(language: Language, policy: LocalizationPolicy) -> Option<&'static str> {
    if policy == LocalizationPolicy::EnglishFallback {
        return None;
    }
    match language {
        Language::En => None,
        Language::Hi => Some(
            "नमस्ते! मैं AidConnect Global के बारे में आपके सवालों में मदद के लिए यहाँ हूँ। आज मैं आपकी कैसे सहायता कर सकता हूँ?",
        ),
        Language::Mr => Some(
            "नमस्कार! AidConnect Global बद्दलच्या तुमच्या प्रश्नांसाठी मी येथे आहे. आज मी तुम्हाला कशी मदत करू शकतो?",
        ),
        Language::Te => Some(
            "నమస్కారం! AidConnect Global గురించి మీ ప్రశ్నలకు సహాయం చేయడానికి నేను ఇక్కడ ఉన్నాను.",
        ),
        Language::Ml => Some(
            "നമസ്കാരം! AidConnect Global സംബന്ധിച്ച നിങ്ങളുടെ ചോദ്യങ്ങൾക്ക് സഹായിക്കാൻ ഞാൻ ഇവിടെയുണ്ട്.",
        ),
        Language::Ta => Some(
            "வணக்கம்! AidConnect Global பற்றிய உங்கள் கேள்விகளுக்கு உதவ நான் இங்கே இருக்கிறேன்.",
        ),
        Language::Bn => Some(
            "নমস্কার! AidConnect Global সম্পর্কে আপনার প্রশ্নে সাহায্য করতে আমি এখানে আছি।",
        ),
        Language::Or => Some(
            "ନମସ୍କାର! AidConnect Global ବିଷୟରେ ଆପଣଙ୍କ ପ୍ରଶ୍ନରେ ସାହାଯ୍ୟ କରିବାକୁ ମୁଁ ଏଠାରେ ଅଛି।",
        ),
    }
}

fn hindi_reply(topic: Topic) -> Option<&'static str> {
    match topic {
        Topic::AccessDenied => Some(
            "क्षमा करें, मैं केवल आपके अपने दान और उनके प्रभाव की जानकारी दे सकता हूँ। संस्था के समग्र वित्त के लिए कृपया info@aidconnect.org पर हमारी टीम से संपर्क करें।",
        ),
        Topic::Donate => Some(
            "**दान कैसे करें:**\n\n1. **ऑनलाइन**: हमारे Donate पेज पर जाएँ (UPI, कार्ड, नेट बैंकिंग)\n2. **बैंक ट्रांसफर**: विवरण के लिए हमसे संपर्क करें\n3. **चेक**: \"AidConnect Global\" के नाम\n\n• 80G कर छूट उपलब्ध\n• न्यूनतम राशि: ₹100\n\nहर रुपया बदलाव लाता है! 🧡",
        ),
        Topic::Contact => Some(
            "**संपर्क करें:**\n\n📧 ईमेल: info@aidconnect.org\n📞 फोन: +91 22 1234 5678\n📍 पता: 123 Hope Street, Mumbai, Maharashtra 400001, India\n\nहमारी टीम 24-48 घंटों में जवाब देती है!",
        ),
        Topic::CapabilityOverview => Some(
            "मैं AidConnect Global के बारे में आपकी मदद कर सकता हूँ:\n\n• हमारा मिशन और कार्यक्रम\n• दान कैसे करें\n• प्रभाव और उपलब्धियाँ\n• स्वयंसेवा के अवसर\n• संपर्क जानकारी\n\nआप क्या जानना चाहेंगे?",
        ),
        _ => None,
    }
}

fn marathi_reply(topic: Topic) -> Option<&'static str> {
    match topic {
        Topic::AccessDenied => Some(
            "क्षमस्व, मी फक्त तुमच्या स्वतःच्या देणग्या आणि त्यांच्या प्रभावाची माहिती देऊ शकतो. संस्थेच्या एकूण आर्थिक माहितीसाठी कृपया info@aidconnect.org वर आमच्या टीमशी संपर्क साधा.",
        ),
        Topic::Donate => Some(
            "**देणगी कशी द्यावी:**\n\n1. **ऑनलाइन**: आमच्या Donate पेजला भेट द्या (UPI, कार्ड, नेट बँकिंग)\n2. **बँक ट्रान्सफर**: तपशीलांसाठी आमच्याशी संपर्क साधा\n3. **चेक**: \"AidConnect Global\" च्या नावे\n\n• 80G कर सवलत उपलब्ध\n• किमान रक्कम: ₹100\n\nप्रत्येक रुपया बदल घडवतो! 🧡",
        ),
        Topic::Contact => Some(
            "**संपर्क साधा:**\n\n📧 ईमेल: info@aidconnect.org\n📞 फोन: +91 22 1234 5678\n📍 पत्ता: 123 Hope Street, Mumbai, Maharashtra 400001, India\n\nआमची टीम 24-48 तासांत उत्तर देते!",
        ),
        Topic::CapabilityOverview => Some(
            "मी AidConnect Global बद्दल तुम्हाला मदत करू शकतो:\n\n• आमचे ध्येय आणि कार्यक्रम\n• देणगी कशी द्यावी\n• प्रभाव आणि कामगिरी\n• स्वयंसेवेच्या संधी\n• संपर्क माहिती\n\nतुम्हाला काय जाणून घ्यायचे आहे?",
        ),
        _ => None,
    }
}

const fn default_reply(language: Language) -> &'static str {
    match language {
        Language::Te => {
            "నేను AidConnect Global గురించి మీకు సహాయం చేయగలను: మా లక్ష్యం, కార్యక్రమాలు, విరాళాలు, స్వచ్ఛంద సేవ మరియు సంప్రదింపు వివరాలు. మీరు ఏమి తెలుసుకోవాలనుకుంటున్నారు?"
        }
        Language::Ml => {
            "AidConnect Global സംബന്ധിച്ച് എനിക്ക് സഹായിക്കാനാകും: ഞങ്ങളുടെ ദൗത്യം, പ്രോഗ്രാമുകൾ, സംഭാവനകൾ, സന്നദ്ധസേവനം, ബന്ധപ്പെടാനുള്ള വിവരങ്ങൾ. നിങ്ങൾക്ക് എന്താണ് അറിയേണ്ടത്?"
        }
        Language::Ta => {
            "AidConnect Global பற்றி நான் உதவ முடியும்: எங்கள் நோக்கம், திட்டங்கள், நன்கொடைகள், தன்னார்வப் பணி மற்றும் தொடர்பு விவரங்கள். நீங்கள் என்ன அறிய விரும்புகிறீர்கள்?"
        }
        Language::Bn => {
            "AidConnect Global সম্পর্কে আমি সাহায্য করতে পারি: আমাদের লক্ষ্য, কর্মসূচি, দান, স্বেচ্ছাসেবা এবং যোগাযোগের তথ্য। আপনি কী জানতে চান?"
        }
        // English text for En/Hi/Mr is unreachable; callers route those
        // languages elsewhere.
        Language::En | Language::Hi | Language::Mr | Language::Or => {
            "AidConnect Global ବିଷୟରେ ମୁଁ ସାହାଯ୍ୟ କରିପାରିବି: ଆମର ଲକ୍ଷ୍ୟ, କାର୍ଯ୍ୟକ୍ରମ, ଦାନ, ସ୍ୱେଚ୍ଛାସେବା ଏବଂ ଯୋଗାଯୋଗ ସୂଚନା। ଆପଣ କଣ ଜାଣିବାକୁ ଚାହାଁନ୍ତି?"
        }
    }
}
