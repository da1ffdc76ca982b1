//! Static label lookup. English is the fallback for every key.

/// Return the localized label for `key`, or `None` for unknown keys.
pub(super) fn lookup(key: &str, lang: &str) -> Option<&'static str> {
    let hi = lang == "Hindi";
    let v = match key {
        "analysis_header" => {
            if hi {
                "🔍 *विश्लेषण परिणाम*"
            } else {
                "🔍 *Analysis Result*"
            }
        }
        "threat_detected" => {
            if hi {
                "⚠️ खतरा पाया गया"
            } else {
                "⚠️ THREAT DETECTED"
            }
        }
        "safe_message" => {
            if hi {
                "✅ संदेश सुरक्षित लगता है"
            } else {
                "✅ Message appears safe"
            }
        }
        "confidence" => {
            if hi {
                "विश्वसनीयता:"
            } else {
                "Confidence:"
            }
        }
        "explanation_label" => {
            if hi {
                "📝 *व्याख्या:*"
            } else {
                "📝 *Explanation:*"
            }
        }
        "advice_label" => {
            if hi {
                "💡 *सलाह:*"
            } else {
                "💡 *Advice:*"
            }
        }
        "note_label" => {
            if hi {
                "📝 नोट:"
            } else {
                "📝 Note:"
            }
        }
        "safe_explanation" => {
            if hi {
                "कोई स्पष्ट खतरे का पैटर्न नहीं मिला।"
            } else {
                "No obvious threat patterns detected."
            }
        }
        "safe_advice" => {
            if hi {
                "संदेश सुरक्षित लगता है, फिर भी ऑनलाइन हमेशा सतर्क रहें।"
            } else {
                "Message appears safe, but always remain cautious online."
            }
        }
        "send_message_prompt" => {
            if hi {
                "📝 आपको मिला संदिग्ध संदेश भेजें (SMS, ईमेल, WhatsApp आदि) — मैं उसका विश्लेषण करूँगा।"
            } else {
                "📝 Send me the suspicious message you received (SMS, email, WhatsApp, etc.) and I'll analyze it for potential threats."
            }
        }
        "send_url_prompt" => {
            if hi {
                "🔗 वह URL/लिंक भेजें जिसकी सुरक्षा आप जांचना चाहते हैं।"
            } else {
                "🔗 Send me the URL/link you want me to check for safety."
            }
        }
        "url_header" => {
            if hi {
                "🔗 *URL विश्लेषण:*"
            } else {
                "🔗 *URL Analysis:*"
            }
        }
        "url_flagged" => {
            if hi {
                "🚨 *खतरा: URL प्रतिष्ठा सेवा द्वारा चिह्नित!*"
            } else {
                "🚨 *DANGER: URL flagged by the reputation service!*"
            }
        }
        "url_threat" => {
            if hi {
                "खतरा:"
            } else {
                "Threat:"
            }
        }
        "url_flagged_advice" => {
            if hi {
                "• इस URL पर न जाएं\n• इसमें मैलवेयर या फ़िशिंग सामग्री हो सकती है\n• संदेश से मिला हो तो अधिकारियों को रिपोर्ट करें"
            } else {
                "• DO NOT visit this URL\n• It may contain malware or phishing content\n• Report to authorities if received via message"
            }
        }
        "url_clean" => {
            if hi {
                "✅ प्रतिष्ठा सेवा: कोई खतरा नहीं मिला"
            } else {
                "✅ Reputation service: no threats detected"
            }
        }
        "url_unknown" => {
            if hi {
                "⚠️ प्रतिष्ठा सेवा उपलब्ध नहीं — स्थानीय जांच पर निर्भर"
            } else {
                "⚠️ Reputation service unavailable — relying on local checks"
            }
        }
        "url_suspicious" => {
            if hi {
                "⚠️ *चेतावनी: URL में संदिग्ध पैटर्न हैं!*"
            } else {
                "⚠️ *WARNING: URL contains suspicious patterns!*"
            }
        }
        "url_contains" => {
            if hi {
                "• शामिल है:"
            } else {
                "• Contains:"
            }
        }
        "url_no_patterns" => {
            if hi {
                "✅ कोई स्पष्ट संदिग्ध पैटर्न नहीं मिला"
            } else {
                "✅ No obvious suspicious patterns detected"
            }
        }
        "url_verify" => {
            if hi {
                "⚠️ अज्ञात लिंक पर क्लिक करने से पहले हमेशा सत्यापित करें"
            } else {
                "⚠️ Always verify unknown links before clicking"
            }
        }
        "no_url_found" => {
            if hi {
                "कोई URL नहीं मिला। /checkurl के बाद लिंक भेजें।"
            } else {
                "No URL found. Send a link after /checkurl."
            }
        }
        "language_usage" => {
            if hi {
                "उपयोग: /language <english|hindi>"
            } else {
                "Usage: /language <english|hindi>"
            }
        }
        "language_unknown" => {
            if hi {
                "यह भाषा समर्थित नहीं है। english या hindi चुनें।"
            } else {
                "That language is not supported. Pick english or hindi."
            }
        }
        "btn_analyze" => {
            if hi {
                "🔍 संदेश विश्लेषण"
            } else {
                "🔍 Analyze Message"
            }
        }
        "btn_emergency" => {
            if hi {
                "🚨 आपातकालीन सहायता"
            } else {
                "🚨 Emergency Help"
            }
        }
        "btn_checkurl" => {
            if hi {
                "🔗 URL सुरक्षा जांच"
            } else {
                "🔗 Check URL Safety"
            }
        }
        "btn_scams" => {
            if hi {
                "📚 घोटालों के बारे में जानें"
            } else {
                "📚 Learn About Scams"
            }
        }
        "btn_language" => {
            // The switch button offers the OTHER language.
            if hi {
                "🌐 Switch to English"
            } else {
                "🌐 हिंदी में बदलें"
            }
        }
        "status_header" => {
            if hi {
                "📊 *स्थिति*"
            } else {
                "📊 *Status*"
            }
        }
        "status_available" => {
            if hi {
                "उपलब्ध"
            } else {
                "available"
            }
        }
        "status_unavailable" => {
            if hi {
                "अनुपलब्ध"
            } else {
                "unavailable"
            }
        }
        "status_not_configured" => {
            if hi {
                "कॉन्फ़िगर नहीं"
            } else {
                "not configured"
            }
        }
        "status_uptime" => {
            if hi {
                "अपटाइम:"
            } else {
                "Uptime:"
            }
        }
        "status_rules" => {
            if hi {
                "नियम श्रेणियां:"
            } else {
                "Rule categories:"
            }
        }
        "emergency_hint" => {
            if hi {
                "🚨 लगता है आपके साथ धोखा हुआ है — नीचे आपातकालीन सहायता देखें।"
            } else {
                "🚨 It sounds like you may have been scammed — see emergency help below."
            }
        }
        _ => return None,
    };
    Some(v)
}
