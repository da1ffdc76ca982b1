//! Canned guidance content: per-category explanation and advice templates,
//! the welcome/help/emergency/education texts, and format helpers.

use rakshak_core::report::ThreatKind;

/// Explanation template for a detected category.
pub fn explanation(kind: ThreatKind, lang: &str) -> &'static str {
    match (kind, lang) {
        (ThreatKind::Phishing, "Hindi") => {
            "यह एक फिशिंग प्रयास लगता है — एक नकली संदेश जो आपकी व्यक्तिगत जानकारी, पासवर्ड या वित्तीय विवरण चुराने के लिए डिज़ाइन किया गया है।"
        }
        (ThreatKind::Phishing, _) => {
            "This appears to be a phishing attempt — a fake message designed to steal your personal information, passwords, or financial details."
        }
        (ThreatKind::OtpScam, "Hindi") => {
            "यह एक OTP घोटाला लगता है जहाँ धोखेबाज आपको अपना वन-टाइम पासवर्ड या सत्यापन कोड साझा करने के लिए बरगलाने की कोशिश करते हैं।"
        }
        (ThreatKind::OtpScam, _) => {
            "This looks like an OTP scam where fraudsters try to trick you into sharing your One-Time Password or verification codes."
        }
        (ThreatKind::JobFraud, "Hindi") => {
            "यह एक नौकरी धोखाधड़ी योजना लगती है जो पैसे या व्यक्तिगत जानकारी चुराने के लिए नकली रोजगार के अवसर प्रदान करती है।"
        }
        (ThreatKind::JobFraud, _) => {
            "This seems to be a job fraud scheme offering fake employment opportunities to steal money or personal information."
        }
        (ThreatKind::FakeLink, "Hindi") => {
            "इस संदेश में संदिग्ध लिंक हैं जो दुर्भावनापूर्ण वेबसाइटों पर ले जा सकते हैं या हानिकारक सॉफ्टवेयर डाउनलोड कर सकते हैं।"
        }
        (ThreatKind::FakeLink, _) => {
            "This message contains suspicious links that might lead to malicious websites or download harmful software."
        }
        (ThreatKind::SocialEngineering, "Hindi") => {
            "यह सोशल इंजीनियरिंग का प्रयास लगता है — भरोसा जीतकर या दबाव डालकर आपसे जानकारी या पैसे निकलवाने की चाल।"
        }
        (ThreatKind::SocialEngineering, _) => {
            "This looks like a social engineering attempt — manipulating trust or urgency to extract information or money from you."
        }
    }
}

/// Advice template for a detected category.
pub fn advice(kind: ThreatKind, lang: &str) -> &'static str {
    match (kind, lang) {
        (ThreatKind::Phishing, "Hindi") => {
            "• किसी भी लिंक पर क्लिक न करें या अटैचमेंट डाउनलोड न करें\n• व्यक्तिगत जानकारी प्रदान न करें\n• आधिकारिक संगठन से सीधे सत्यापित करें\n• cybercrime.gov.in पर रिपोर्ट करें"
        }
        (ThreatKind::Phishing, _) => {
            "• Do NOT click any links or download attachments\n• Do NOT provide personal information\n• Verify with the official organization directly\n• Report to cybercrime.gov.in"
        }
        (ThreatKind::OtpScam, "Hindi") => {
            "• कभी भी OTP, PIN, या सत्यापन कोड किसी के साथ साझा न करें\n• बैंक/कंपनियां फोन/संदेश पर OTP नहीं मांगती\n• यदि OTP साझा किया है, तुरंत अपने बैंक से संपर्क करें\n• समझौता होने पर कार्ड ब्लॉक करें"
        }
        (ThreatKind::OtpScam, _) => {
            "• NEVER share OTP, PIN, or verification codes with anyone\n• Banks/companies never ask for OTP over phone/message\n• If you shared OTP, immediately contact your bank\n• Block your cards if compromised"
        }
        (ThreatKind::JobFraud, "Hindi") => {
            "• कोई रजिस्ट्रेशन या प्रोसेसिंग फीस न दें\n• वैध कंपनियां अग्रिम भुगतान नहीं मांगती\n• कंपनी के विवरण स्वतंत्र रूप से सत्यापित करें\n• स्थानीय साइबर पुलिस को रिपोर्ट करें"
        }
        (ThreatKind::JobFraud, _) => {
            "• Do NOT pay any registration or processing fees\n• Legitimate companies don't ask for upfront payments\n• Verify company details independently\n• Report to local cyber police"
        }
        (ThreatKind::FakeLink, "Hindi") => {
            "• संदिग्ध लिंक पर क्लिक न करें\n• ब्राउज़र में URL मैन्युअल रूप से टाइप करें\n• एंटीवायरस सॉफ्टवेयर का उपयोग करें\n• फिशिंग प्रयासों की रिपोर्ट करें"
        }
        (ThreatKind::FakeLink, _) => {
            "• Do NOT click on suspicious links\n• Type URLs manually in browser\n• Use antivirus software\n• Report phishing attempts"
        }
        (ThreatKind::SocialEngineering, "Hindi") => {
            "• दबाव में आकर कोई निर्णय न लें\n• पहचान की स्वतंत्र रूप से पुष्टि करें\n• पैसे या जानकारी साझा करने से पहले किसी भरोसेमंद व्यक्ति से सलाह लें"
        }
        (ThreatKind::SocialEngineering, _) => {
            "• Do not act under pressure\n• Verify the person's identity independently\n• Talk to someone you trust before sharing money or information"
        }
    }
}

/// The welcome text sent on /start.
pub fn welcome(lang: &str) -> &'static str {
    if lang == "Hindi" {
        "🛡️ *रक्षक* में आपका स्वागत है!\n\n\
         मैं आपका साइबर सुरक्षा गार्डियन हूँ। मैं आपकी मदद कर सकता हूँ:\n\n\
         🔍 संदिग्ध संदेशों का विश्लेषण करने में\n\
         🚨 धोखाधड़ी की स्थिति में आपातकालीन सहायता\n\
         🔗 URL/लिंक की सुरक्षा जांचने में\n\
         📚 आम ऑनलाइन घोटालों के बारे में जानने में\n\
         🌐 अंग्रेजी और हिंदी के बीच स्विच करने में\n\n\
         आप क्या करना चाहते हैं:"
    } else {
        "🛡️ Welcome to *Rakshak*!\n\n\
         I'm your personal cybersecurity guardian. I can help you:\n\n\
         🔍 Analyze suspicious messages for scams\n\
         🚨 Get emergency help if you've been scammed\n\
         🔗 Check if URLs/links are safe\n\
         📚 Learn about common online scams\n\
         🌐 Switch between English and Hindi\n\n\
         Choose what you'd like to do:"
    }
}

/// The /help text.
pub fn help(lang: &str) -> &'static str {
    if lang == "Hindi" {
        "*कमांड:*\n\
         /analyze — संदिग्ध संदेश का विश्लेषण\n\
         /checkurl — URL/लिंक की सुरक्षा जांच\n\
         /emergency — धोखाधड़ी होने पर तत्काल कदम\n\
         /scams — आम घोटालों के बारे में जानें\n\
         /language — भाषा बदलें (english/hindi)\n\
         /status — बॉट और सेवाओं की स्थिति\n\n\
         कोई भी संदेश सीधे भेजें — मैं उसका विश्लेषण कर दूँगा।"
    } else {
        "*Commands:*\n\
         /analyze — analyze a suspicious message\n\
         /checkurl — check if a URL/link is safe\n\
         /emergency — immediate steps if you've been scammed\n\
         /scams — learn about common scams\n\
         /language — switch language (english/hindi)\n\
         /status — bot and service status\n\n\
         Or just send any message and I'll analyze it."
    }
}

/// The full emergency-response block: immediate actions + helpline contacts.
pub fn emergency(lang: &str) -> &'static str {
    if lang == "Hindi" {
        "🚨 *आपातकालीन मोड सक्रिय* 🚨\n\n\
         *तत्काल आवश्यक कार्रवाई:*\n\
         1. तुरंत सभी लेनदेन बंद करें\n\
         2. अभी अपने बैंक/क्रेडिट कार्ड कंपनी से संपर्क करें\n\
         3. सभी पासवर्ड और PIN बदलें\n\
         4. cybercrime.gov.in पर शिकायत दर्ज करें\n\
         5. स्थानीय पुलिस साइबर सेल को रिपोर्ट करें\n\
         6. सभी सबूत रखें (स्क्रीनशॉट, संदेश)\n\n\
         *आपातकालीन संपर्क:*\n\
         📞 साइबर क्राइम हेल्पलाइन: 155\n\
         📞 बैंकिंग फ्रॉड: 1930\n\
         📞 CERT-In: 1800-11-4949\n\
         📧 CERT-In ईमेल: incident@cert-in.org.in\n\
         🌐 साइबर क्राइम पोर्टल: cybercrime.gov.in\n\n\
         ⚠️ जल्दी कार्रवाई करें — साइबर फ्रॉड के मामलों में समय महत्वपूर्ण है!"
    } else {
        "🚨 *EMERGENCY MODE ACTIVATED* 🚨\n\n\
         *Immediate Actions Required:*\n\
         1. STOP all transactions immediately\n\
         2. Contact your bank/credit card company NOW\n\
         3. Change all passwords and PINs\n\
         4. File complaint at cybercrime.gov.in\n\
         5. Report to local police cyber cell\n\
         6. Keep all evidence (screenshots, messages)\n\n\
         *Emergency Contacts:*\n\
         📞 Cyber Crime Helpline: 155\n\
         📞 Banking Fraud: 1930\n\
         📞 CERT-In: 1800-11-4949\n\
         📧 CERT-In Email: incident@cert-in.org.in\n\
         🌐 Cyber Crime Portal: cybercrime.gov.in\n\n\
         ⚠️ Act quickly — time is critical in cyber fraud cases!"
    }
}

/// The /scams education block.
pub fn education(lang: &str) -> &'static str {
    if lang == "Hindi" {
        "📚 *आम ऑनलाइन घोटाले — जानकार रहें!*\n\n\
         *फिशिंग:* व्यक्तिगत जानकारी मांगने वाले नकली ईमेल/संदेश। तत्काल भाषा, वर्तनी त्रुटियों, संदिग्ध लिंक पर ध्यान दें।\n\n\
         *OTP घोटाले:* धोखेबाज बैंक/कंपनी के नाम से फोन करके OTP मांगते हैं। कभी भी OTP किसी के साथ साझा न करें।\n\n\
         *नौकरी धोखाधड़ी:* रजिस्ट्रेशन फीस मांगने वाले नकली जॉब ऑफर। वैध नियोक्ता अग्रिम भुगतान नहीं मांगते।\n\n\
         *रोमांस घोटाले:* भावनात्मक कनेक्शन बनाने के बाद पैसे मांगने वाले नकली प्रोफाइल।\n\n\
         *निवेश घोटाले:* गारंटीड रिटर्न का वादा करने वाली जल्दी-अमीर योजनाएं। निवेश से पहले हमेशा सत्यापित करें।\n\n\
         *टेक सपोर्ट घोटाले:* कंप्यूटर समस्याओं का दावा करने वाले नकली कॉल। अज्ञात कॉल करने वालों को रिमोट एक्सेस न दें।\n\n\
         🛡️ याद रखें: संदेह होने पर स्वतंत्र रूप से सत्यापित करें!"
    } else {
        "📚 *Common Online Scams — Stay Informed!*\n\n\
         *Phishing:* Fake emails/messages asking for personal info. Look for urgent language, spelling errors, suspicious links.\n\n\
         *OTP Scams:* Fraudsters call pretending to be from bank/company asking for OTP. NEVER share OTP with anyone.\n\n\
         *Job Frauds:* Fake job offers asking for registration fees. Legitimate employers never ask for upfront payments.\n\n\
         *Romance Scams:* Fake profiles on social media/dating apps asking for money after building emotional connection.\n\n\
         *Investment Scams:* Get-rich-quick schemes promising guaranteed returns. Always verify before investing.\n\n\
         *Tech Support Scams:* Fake calls claiming computer issues. Never give remote access to unknown callers.\n\n\
         🛡️ Remember: when in doubt, verify independently!"
    }
}

/// Confirmation shown after switching language — always in the NEW language.
pub fn language_switched(new_lang: &str) -> &'static str {
    if new_lang == "Hindi" {
        "भाषा हिंदी में बदल गई। 🇮🇳"
    } else {
        "Language switched to English. 🇬🇧"
    }
}
