//! Built-in translation tables for the portal.
//!
//! Each language is a static `(key, text)` table embedded at compile time.
//! Lookups are linear per table, which is fine for the ~80 keys the portal
//! renders. A key missing from the active language resolves to the key
//! itself; there is no cross-language fallback.

use crate::domain::Language;

/// Source of localized strings for `(language, key)` pairs.
pub trait Translator: Send + Sync {
    fn lookup(&self, language: Language, key: &str) -> Option<&str>;

    /// Localized text for `key`, or `key` itself when no entry exists.
    fn translate<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.lookup(language, key).unwrap_or(key)
    }
}

/// The compiled-in en/am/om catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn table(language: Language) -> &'static [(&'static str, &'static str)] {
        match language {
            Language::En => EN,
            Language::Am => AM,
            Language::Om => OM,
        }
    }
}

impl Translator for Catalog {
    fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        Self::table(language)
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

const EN: &[(&str, &str)] = &[
    ("officialWebsite", "An official website of the Federal Democratic Republic of Ethiopia"),
    ("title", "Collision Data Analysis & Alert System"),
    ("subtitle", "Coordinating infrastructure works between sectors to prevent utility collisions."),
    ("home", "Home"),
    ("about", "About"),
    ("learnMore", "Learn More"),
    ("login", "Login"),
    ("logout", "Logout"),
    ("getStarted", "Get Started"),
    ("collisionHistory", "Collision History"),
    ("collisionDesc", "Road, water, power and telecom works repeatedly damage each other's assets."),
    ("collisionHistoryPara", "Uncoordinated excavation has cut fibre lines, burst water mains and delayed road projects, costing public funds and service hours."),
    ("purpose", "Purpose"),
    ("aiDesc", "Sector geodata is analysed to flag overlapping work zones before digging starts."),
    ("digitalEthiopia", "Digital Ethiopia 2025"),
    ("digitalEthiopiaDesc", "Part of the national strategy to digitize public infrastructure planning."),
    ("vision", "Vision"),
    ("visionDesc", "Infrastructure development without avoidable damage between sectors."),
    ("mission", "Mission"),
    ("missionDesc", "Collect sector plans in one place and alert managers to conflicts early."),
    ("back", "Back"),
    ("guidelineTitle", "Guidelines"),
    ("howToUseTitle", "How to use the portal"),
    ("howToUseDesc", "Sectors sign in, upload their legal document and longitude/latitude files; managers review every submission on their dashboard."),
    ("problemStatement", "Problem Statement"),
    ("problemPara", "Sectors plan works independently and rarely share the exact location of their assets."),
    ("solutionStatement", "Solution"),
    ("solutionPara", "A shared submission portal that gathers geodata from every sector for collision analysis."),
    ("managerLogin", "Manager Login"),
    ("sectorLogin", "Sector Login"),
    ("credentialsDesc", "Enter your credentials to access the portal."),
    ("password", "Password"),
    ("enterPassword", "Enter password"),
    ("savePassword", "Save password"),
    ("signIn", "Sign In"),
    ("managerDashboard", "Manager Dashboard"),
    ("welcomeManager", "Welcome back. Here is the latest information received from sectors."),
    ("managerActive", "Manager session active"),
    ("collisionAnalysis", "Collision Analysis"),
    ("activeStatus", "Active"),
    ("connectedSectors", "Connected Sectors"),
    ("totalSubmissions", "Total Submissions"),
    ("receivedInfo", "Received Information"),
    ("sectorName", "Sector Name"),
    ("documentHeader", "Document"),
    ("geodataHeader", "Geodata"),
    ("timestamp", "Timestamp"),
    ("noData", "No submissions received yet."),
    ("sectorPortal", "Sector Portal"),
    ("sectorGreeting", "Submit your legal document and project geodata for collision analysis."),
    ("enterInfo", "Enter Information"),
    ("govLegality", "Government Legality Document"),
    ("chooseFile", "Choose file"),
    ("longitude", "Longitude File"),
    ("latitude", "Latitude File"),
    ("submit", "Submit"),
    ("loading", "Processing..."),
    ("success", "Submission received successfully."),
    ("quickLinks", "Quick Links"),
    ("contactUs", "Contact Us"),
    ("address", "Addis Ababa, Ethiopia"),
    ("email", "info@cdaas.gov.et"),
    ("phone", "+251 11 000 0000"),
    ("legal", "Legal"),
    ("privacyPolicy", "Privacy Policy"),
    ("termsOfService", "Terms of Service"),
    ("copyright", "© 2025 CDAAS. All rights reserved."),
    ("requiredField", "Please fill in"),
    ("storageWarning", "Could not save to local storage; data is kept for this session only."),
    ("corruptDataWarning", "Saved submissions were unreadable and have been reset."),
    ("accessDenied", "Please sign in with the matching role to open this dashboard."),
    ("dismiss", "Dismiss"),
    ("darkMode", "Dark"),
    ("lightMode", "Light"),
    ("forgetPassword", "Forget saved password"),
];

const AM: &[(&str, &str)] = &[
    ("officialWebsite", "የኢትዮጵያ ፌዴራላዊ ዴሞክራሲያዊ ሪፐብሊክ ይፋዊ ድረ-ገጽ"),
    ("title", "የግጭት መረጃ ትንተና እና ማስጠንቀቂያ ሥርዓት"),
    ("subtitle", "የመሠረተ ልማት ግጭትን ለመከላከል በዘርፎች መካከል ሥራዎችን ማስተባበር።"),
    ("home", "መነሻ"),
    ("about", "ስለ እኛ"),
    ("learnMore", "ተጨማሪ ይወቁ"),
    ("login", "ግባ"),
    ("logout", "ውጣ"),
    ("getStarted", "ይጀምሩ"),
    ("collisionHistory", "የግጭት ታሪክ"),
    ("collisionDesc", "የመንገድ፣ የውሃ፣ የኤሌክትሪክ እና የቴሌኮም ሥራዎች አንዱ የሌላውን ንብረት ደጋግመው ያበላሻሉ።"),
    ("collisionHistoryPara", "ያልተቀናጀ ቁፋሮ የፋይበር መስመሮችን ቆርጧል፣ የውሃ ቧንቧዎችን ሰብሯል፣ የመንገድ ፕሮጀክቶችንም አዘግይቷል።"),
    ("purpose", "ዓላማ"),
    ("aiDesc", "ቁፋሮ ከመጀመሩ በፊት የሚደራረቡ የሥራ ቦታዎችን ለመለየት የዘርፎች መልክዓ-ምድራዊ መረጃ ይተነተናል።"),
    ("digitalEthiopia", "ዲጂታል ኢትዮጵያ 2025"),
    ("digitalEthiopiaDesc", "የሕዝብ መሠረተ ልማት ዕቅድን ዲጂታል የማድረግ ብሔራዊ ስትራቴጂ አካል።"),
    ("vision", "ራዕይ"),
    ("visionDesc", "በዘርፎች መካከል ሊወገድ የሚችል ጉዳት የሌለበት የመሠረተ ልማት ግንባታ።"),
    ("mission", "ተልዕኮ"),
    ("missionDesc", "የዘርፎችን ዕቅድ በአንድ ቦታ ሰብስቦ ለአስተዳዳሪዎች ግጭትን ቀድሞ ማሳወቅ።"),
    ("back", "ተመለስ"),
    ("guidelineTitle", "መመሪያዎች"),
    ("howToUseTitle", "ፖርታሉን እንዴት መጠቀም እንደሚቻል"),
    ("howToUseDesc", "ዘርፎች ገብተው ሕጋዊ ሰነዳቸውን እና የኬንትሮስ/ኬክሮስ ፋይሎችን ይጭናሉ፤ አስተዳዳሪዎች እያንዳንዱን ማስገቢያ በዳሽቦርዳቸው ይገመግማሉ።"),
    ("problemStatement", "የችግሩ መግለጫ"),
    ("problemPara", "ዘርፎች ሥራቸውን ለብቻቸው ያቅዳሉ፤ የንብረቶቻቸውን ትክክለኛ ቦታ እምብዛም አይጋሩም።"),
    ("solutionStatement", "መፍትሄ"),
    ("solutionPara", "ከሁሉም ዘርፎች መልክዓ-ምድራዊ መረጃን ለግጭት ትንተና የሚሰበስብ የጋራ ፖርታል።"),
    ("managerLogin", "የአስተዳዳሪ መግቢያ"),
    ("sectorLogin", "የዘርፍ መግቢያ"),
    ("credentialsDesc", "ፖርታሉን ለመጠቀም ምስክርነትዎን ያስገቡ።"),
    ("password", "የይለፍ ቃል"),
    ("enterPassword", "የይለፍ ቃል ያስገቡ"),
    ("savePassword", "የይለፍ ቃል አስቀምጥ"),
    ("signIn", "ግባ"),
    ("managerDashboard", "የአስተዳዳሪ ዳሽቦርድ"),
    ("welcomeManager", "እንኳን ደህና መጡ። ከዘርፎች የደረሰው የቅርብ ጊዜ መረጃ ይኸውና።"),
    ("managerActive", "የአስተዳዳሪ ክፍለ-ጊዜ ንቁ ነው"),
    ("collisionAnalysis", "የግጭት ትንተና"),
    ("activeStatus", "ንቁ"),
    ("connectedSectors", "የተገናኙ ዘርፎች"),
    ("totalSubmissions", "ጠቅላላ ማስገቢያዎች"),
    ("receivedInfo", "የደረሰ መረጃ"),
    ("sectorName", "የዘርፉ ስም"),
    ("documentHeader", "ሰነድ"),
    ("geodataHeader", "መልክዓ-ምድራዊ መረጃ"),
    ("timestamp", "ጊዜ"),
    ("noData", "እስካሁን ምንም ማስገቢያ አልደረሰም።"),
    ("sectorPortal", "የዘርፍ ፖርታል"),
    ("sectorGreeting", "ሕጋዊ ሰነድዎን እና የፕሮጀክት መልክዓ-ምድራዊ መረጃን ለግጭት ትንተና ያስገቡ።"),
    ("enterInfo", "መረጃ ያስገቡ"),
    ("govLegality", "የመንግሥት ሕጋዊነት ሰነድ"),
    ("chooseFile", "ፋይል ይምረጡ"),
    ("longitude", "የኬንትሮስ ፋይል"),
    ("latitude", "የኬክሮስ ፋይል"),
    ("submit", "አስገባ"),
    ("loading", "በሂደት ላይ..."),
    ("success", "ማስገቢያው በተሳካ ሁኔታ ደርሷል።"),
    ("quickLinks", "ፈጣን አገናኞች"),
    ("contactUs", "ያግኙን"),
    ("address", "አዲስ አበባ፣ ኢትዮጵያ"),
    ("email", "info@cdaas.gov.et"),
    ("phone", "+251 11 000 0000"),
    ("legal", "ሕጋዊ"),
    ("privacyPolicy", "የግላዊነት ፖሊሲ"),
    ("termsOfService", "የአገልግሎት ውሎች"),
    ("copyright", "© 2025 CDAAS። መብቱ በሕግ የተጠበቀ ነው።"),
    ("requiredField", "እባክዎ ይሙሉ"),
    ("storageWarning", "ወደ አካባቢያዊ ማከማቻ ማስቀመጥ አልተቻለም፤ መረጃው ለዚህ ክፍለ-ጊዜ ብቻ ይቆያል።"),
    ("corruptDataWarning", "የተቀመጡ ማስገቢያዎች ሊነበቡ ስላልቻሉ ዳግም ተጀምረዋል።"),
    ("accessDenied", "ይህን ዳሽቦርድ ለመክፈት በተዛማጅ ሚና ይግቡ።"),
    ("dismiss", "ዝጋ"),
    ("darkMode", "ጨለማ"),
    ("lightMode", "ብርሃን"),
    ("forgetPassword", "የተቀመጠውን የይለፍ ቃል እርሳ"),
];

const OM: &[(&str, &str)] = &[
    ("officialWebsite", "Marsariitii seera qabeessa Rippabliika Federaalawaa Dimokraatawaa Itoophiyaa"),
    ("title", "Sirna Xiinxala Daataa Walitti Bu'iinsaa fi Akeekkachiisaa"),
    ("subtitle", "Walitti bu'iinsa bu'uuraalee misoomaa ittisuuf hojii damee gidduu qindeessuu."),
    ("home", "Fuula Jalqabaa"),
    ("about", "Waa'ee Keenya"),
    ("learnMore", "Caalaa Baradhu"),
    ("login", "Seeni"),
    ("logout", "Ba'i"),
    ("getStarted", "Jalqabi"),
    ("collisionHistory", "Seenaa Walitti Bu'iinsaa"),
    ("collisionDesc", "Hojiin karaa, bishaanii, humna ibsaa fi telekoomii qabeenya wal irra deddeebiin miidha."),
    ("collisionHistoryPara", "Qotiinsi hin qindoofne sarara faayibarii cite, ujummoo bishaanii caccabse, pirojektii karaas harkifate."),
    ("purpose", "Kaayyoo"),
    ("aiDesc", "Qotiinsi osoo hin jalqabin bakka hojii wal irra bu'an adda baasuuf daataan lafa damee xiinxalama."),
    ("digitalEthiopia", "Itoophiyaa Dijitaalaa 2025"),
    ("digitalEthiopiaDesc", "Tarsiimoo biyyaalessaa karoora bu'uuraalee misoomaa ummataa dijitaalessuu keessaa tokko."),
    ("vision", "Mul'ata"),
    ("visionDesc", "Misooma bu'uuraalee miidhaa dameewwan gidduu ittisamuu danda'u malee."),
    ("mission", "Ergama"),
    ("missionDesc", "Karoora dameewwanii bakka tokkotti walitti qabuun walitti bu'iinsa dursee beeksisuu."),
    ("back", "Deebi'i"),
    ("guidelineTitle", "Qajeelfama"),
    ("howToUseTitle", "Akkaataa itti fayyadama poortaalichaa"),
    ("howToUseDesc", "Dameewwan seenanii sanada seeraa fi faayilii dheerina/ballinaa olkaa'u; bulchitoonni galmee hunda gabatee isaanii irratti ilaalu."),
    ("problemStatement", "Ibsa Rakkoo"),
    ("problemPara", "Dameewwan hojii isaanii kophaa karoorfatu; bakka qabeenya isaanii sirrii ta'e wal hin qooddatan."),
    ("solutionStatement", "Furmaata"),
    ("solutionPara", "Poortaala waloo daataa lafaa damee hunda irraa xiinxala walitti bu'iinsaaf walitti qabu."),
    ("managerLogin", "Seensa Bulchaa"),
    ("sectorLogin", "Seensa Damee"),
    ("credentialsDesc", "Poortaalicha seenuuf ragaa kee galchi."),
    ("password", "Jecha Icciitii"),
    ("enterPassword", "Jecha icciitii galchi"),
    ("savePassword", "Jecha icciitii olkaa'i"),
    ("signIn", "Seeni"),
    ("managerDashboard", "Gabatee Bulchaa"),
    ("welcomeManager", "Baga nagaan dhufte. Odeeffannoo dameewwan irraa dhufe isa dhiyoo kunoo."),
    ("managerActive", "Yeroon bulchaa hojii irra jira"),
    ("collisionAnalysis", "Xiinxala Walitti Bu'iinsaa"),
    ("activeStatus", "Hojii irra"),
    ("connectedSectors", "Dameewwan Walqunnaman"),
    ("totalSubmissions", "Waliigala Galmeewwanii"),
    ("receivedInfo", "Odeeffannoo Dhufe"),
    ("sectorName", "Maqaa Damee"),
    ("documentHeader", "Sanada"),
    ("geodataHeader", "Daataa Lafaa"),
    ("timestamp", "Yeroo"),
    ("noData", "Hanga ammaatti galmeen tokkollee hin dhufne."),
    ("sectorPortal", "Poortaala Damee"),
    ("sectorGreeting", "Sanada seeraa fi daataa lafa pirojektii keessanii xiinxala walitti bu'iinsaaf galchaa."),
    ("enterInfo", "Odeeffannoo Galchi"),
    ("govLegality", "Sanada Seerummaa Mootummaa"),
    ("chooseFile", "Faayilii filadhu"),
    ("longitude", "Faayilii Dheerina"),
    ("latitude", "Faayilii Ballina"),
    ("submit", "Galchi"),
    ("loading", "Hojjetamaa jira..."),
    ("success", "Galmeen milkaa'inaan fudhatameera."),
    ("quickLinks", "Geessituu Saffisaa"),
    ("contactUs", "Nu Qunnamaa"),
    ("address", "Finfinnee, Itoophiyaa"),
    ("email", "info@cdaas.gov.et"),
    ("phone", "+251 11 000 0000"),
    ("legal", "Seeraa"),
    ("privacyPolicy", "Imaammata Dhuunfaa"),
    ("termsOfService", "Haalota Tajaajilaa"),
    ("copyright", "© 2025 CDAAS. Mirgi hundi seeraan eegamaadha."),
    ("requiredField", "Maaloo guuti"),
    ("storageWarning", "Kuusaa naannootti olkaa'uun hin danda'amne; daataan yeroo kanaaf qofa tursiifama."),
    ("corruptDataWarning", "Galmeewwan olkaa'aman dubbifamuu waan hin dandeenyeef haaromfamaniiru."),
    ("accessDenied", "Gabatee kana banuuf gahee walsimuun seeni."),
    ("dismiss", "Cufi"),
    ("darkMode", "Dukkana"),
    ("lightMode", "Ifa"),
    ("forgetPassword", "Jecha icciitii olkaa'ame irraanfadhu"),
];
