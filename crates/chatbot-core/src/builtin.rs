//! Built-in Mwalimu Hope Foundation corpus.
//!
//! Questions are grouped by intent; every intent listed in
//! [`QUESTION_GROUPS`] has exactly one entry in [`RESPONSES`].

use crate::corpus::{Corpus, CorpusDocument, IntentResponses};

/// Intent returned when nothing better matches.
pub const DEFAULT_INTENT: &str = "general";

/// Reply used when the chatbot cannot answer at all.
pub const FALLBACK_REPLY: &str = "I'm sorry, I'm having trouble understanding right now. \
Please contact us directly at mwalimuhopefoundation@gmail.com or call 0721660901.";

const DONATION: &[&str] = &[
    "How can I donate to the foundation?",
    "What are the donation methods?",
    "How do I make a donation?",
    "Can I donate online?",
    "What payment methods do you accept?",
    "How can I contribute financially?",
    "Is my donation tax deductible?",
    "Can I set up recurring donations?",
    "How are donations used?",
    "What percentage goes to programs?",
    "Are donations tax exempt?",
    "How can I track my donation?",
];

const PROGRAMS: &[&str] = &[
    "What programs do you offer?",
    "What services do you provide?",
    "What education programs do you have?",
    "Tell me about your mental health programs",
    "What community projects are you running?",
    "How do you help with poverty alleviation?",
    "What support do you offer to students?",
    "Do you provide counseling services?",
    "What healthcare initiatives do you have?",
    "How do you promote preventive healthcare?",
    "What economic empowerment programs exist?",
    "Do you offer vocational training?",
    "What community development projects?",
    "How do you support underprivileged learners?",
];

const VOLUNTEER: &[&str] = &[
    "How can I volunteer?",
    "What volunteer opportunities are available?",
    "How do I become a volunteer?",
    "What skills do you need from volunteers?",
    "Can I volunteer remotely?",
    "What is the volunteer commitment?",
    "How do I apply to volunteer?",
    "What volunteer roles exist?",
    "Can I volunteer in education programs?",
    "How can I help with mental health awareness?",
    "What community outreach can I join?",
];

const MISSION: &[&str] = &[
    "What is your mission?",
    "What is your vision?",
    "What does Mwalimu Hope Foundation do?",
    "What is the foundation about?",
    "Tell me about your organization",
    "What are your goals?",
    "What impact do you make?",
    "What are your main objectives?",
    "How do you promote education access?",
    "What mental health support do you provide?",
    "How do you reduce poverty?",
    "What healthcare initiatives do you run?",
    "How do you mobilize resources?",
    "Do you collaborate with government?",
];

const LOCATION: &[&str] = &[
    "Where are you located?",
    "What is your address?",
    "How can I contact you?",
    "What is your phone number?",
    "What is your email address?",
    "Where is your office?",
    "How do I reach you?",
    "What is your postal address?",
    "Where is Meghon Plaza?",
    "How do I find your office?",
    "What is your physical location?",
];

const MEMBERSHIP: &[&str] = &[
    "How can I become a member?",
    "How do I join the foundation?",
    "Can I partner with you?",
    "How can organizations collaborate?",
    "What are the membership benefits?",
    "How do I get involved?",
    "What are member rights?",
    "What are member duties?",
    "How do I support the foundation?",
    "Can I be an advisor?",
    "How do I become a board member?",
    "What is the membership process?",
];

const GOVERNANCE: &[&str] = &[
    "Who runs the foundation?",
    "What is your governance structure?",
    "Who is on the board?",
    "How is the foundation managed?",
    "Who heads the foundation?",
    "What is the leadership structure?",
    "How are decisions made?",
    "Who can I speak to about partnerships?",
    "How is the foundation organized?",
    "What are the board positions?",
];

const VALUES: &[&str] = &[
    "What are your values?",
    "What principles guide you?",
    "How do you ensure integrity?",
    "What is your accountability policy?",
    "How do you promote inclusivity?",
    "What professional standards do you follow?",
    "How do you serve humanity?",
    "What ethical standards do you maintain?",
];

const EVENTS: &[&str] = &[
    "What events do you organize?",
    "When are your next events?",
    "How can I attend your events?",
    "Do you have upcoming activities?",
    "What workshops do you offer?",
    "Are your events free?",
    "When is your AGM?",
    "How often do you have board meetings?",
    "What community events do you host?",
    "Do you have annual meetings?",
];

const FINANCIAL: &[&str] = &[
    "How is the foundation funded?",
    "Where do your funds come from?",
    "How are funds utilized?",
    "What are authorized expenses?",
    "Are your accounts audited?",
    "How do you ensure financial transparency?",
    "What financial reports do you provide?",
    "How are funds managed?",
    "What are operational costs?",
    "How much goes to programs?",
];

const LEGAL: &[&str] = &[
    "Are you registered in Kenya?",
    "What is your legal status?",
    "Are you a non-profit organization?",
    "Is the foundation non-political?",
    "Are you non-sectarian?",
    "What laws govern the foundation?",
    "How do you handle disputes?",
    "What is your dispute resolution process?",
    "How are conflicts resolved?",
    "What legal protections exist?",
];

const LEADERSHIP: &[&str] = &[
    "Who are the officials?",
    "Who is the CEO?",
    "Who is the secretary?",
    "Who is the advisor?",
    "Who are the board members?",
    "How can I contact the CEO?",
    "How can I contact the secretary?",
    "How can I contact the advisor?",
    "What are the officials' qualifications?",
    "Who is Simiyu Leviticus?",
    "Who is Anjeline Nafula Juma?",
    "Who is Dr. Mbiti Mwondi?",
];

const REGISTRATION: &[&str] = &[
    "Are you registered?",
    "What is your registration status?",
    "Where are you registered?",
    "What documents are required for registration?",
    "Who is your registration authority?",
    "What is your registration number?",
    "Are you legally registered in Kenya?",
    "What is your NGO status?",
    "How do I verify your registration?",
    "What is your official status?",
];

const GENERAL: &[&str] = &[
    "Who founded the foundation?",
    "When was the foundation established?",
    "How long have you been operating?",
    "What areas do you serve?",
    "Do you work in other counties?",
    "What is your success rate?",
    "How many people have you helped?",
    "What are your achievements?",
    "What is your track record?",
    "How effective are your programs?",
    "What impact have you made?",
    "What are your success stories?",
];

/// Training questions in corpus order, grouped by intent.
pub const QUESTION_GROUPS: &[(&str, &[&str])] = &[
    ("donation", DONATION),
    ("programs", PROGRAMS),
    ("volunteer", VOLUNTEER),
    ("mission", MISSION),
    ("location", LOCATION),
    ("membership", MEMBERSHIP),
    ("governance", GOVERNANCE),
    ("values", VALUES),
    ("events", EVENTS),
    ("financial", FINANCIAL),
    ("legal", LEGAL),
    ("leadership", LEADERSHIP),
    ("registration", REGISTRATION),
    ("general", GENERAL),
];

/// Canned reply per intent.
pub const RESPONSES: &[(&str, &str)] = &[
    (
        "donation",
        concat!(
            "**Support Mwalimu Hope Foundation:**\n",
            "\n",
            "💰 **Donation Methods:**\n",
            "• Mobile Money: 0721660901\n",
            "• Bank Transfer: Contact us for details\n",
            "• Online: Visit our website\n",
            "• In-person: Meghon Plaza, Bungoma Town\n",
            "\n",
            "📊 **How Donations Are Used:**\n",
            "• Education programs for underprivileged learners\n",
            "• Mental health awareness and support\n",
            "• Poverty reduction initiatives\n",
            "• Healthcare programs\n",
            "• Community development projects\n",
            "\n",
            "✅ **Financial Transparency:**\n",
            "• All funds are banked and audited annually\n",
            "• Authorized expenses include operational costs and welfare activities\n",
            "• Regular financial reports available\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "programs",
        concat!(
            "**Mwalimu Hope Foundation Programs:**\n",
            "\n",
            "🎓 **Education Initiatives:**\n",
            "• Promote access to quality education for underprivileged learners\n",
            "• Provide scholarships and learning resources\n",
            "• Educational workshops and training programs\n",
            "\n",
            "🧠 **Mental Health & Healthcare:**\n",
            "• Raise awareness about mental health and psychosocial well-being\n",
            "• Provide counseling and support services\n",
            "• Promote preventive and curative healthcare initiatives\n",
            "• Community health awareness campaigns\n",
            "\n",
            "🏘️ **Community Development:**\n",
            "• Implement poverty reduction and economic empowerment initiatives\n",
            "• Mobilize resources for community development projects\n",
            "• Vocational training and skills development\n",
            "• Infrastructure development projects\n",
            "\n",
            "🤝 **Collaboration:**\n",
            "• Partner with government and other organizations\n",
            "• Community outreach and engagement\n",
            "• Sustainable development initiatives\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "volunteer",
        concat!(
            "**Volunteer with Mwalimu Hope Foundation:**\n",
            "\n",
            "🤝 **Volunteer Opportunities:**\n",
            "• Education program support and tutoring\n",
            "• Mental health awareness campaigns\n",
            "• Community outreach and engagement\n",
            "• Healthcare initiatives and health drives\n",
            "• Administrative and organizational support\n",
            "• Event planning and management\n",
            "• Fundraising and resource mobilization\n",
            "\n",
            "📋 **How to Apply:**\n",
            "1. Contact us at simiyuleviticus93@gmail.com\n",
            "2. Specify your area of interest and skills\n",
            "3. Attend an orientation session\n",
            "4. Start making a difference in your community!\n",
            "\n",
            "🎯 **Volunteer Benefits:**\n",
            "• Gain valuable experience in community development\n",
            "• Network with like-minded individuals\n",
            "• Make a real impact in people's lives\n",
            "• Develop new skills and knowledge\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "mission",
        concat!(
            "**Mwalimu Hope Foundation:**\n",
            "\n",
            "🌟 **Our Vision:**\n",
            "To create a society where every individual has access to education, mental health support, and sustainable livelihoods.\n",
            "\n",
            "🎯 **Our Mission:**\n",
            "To empower communities through education, health advocacy, and poverty alleviation programs for sustainable development.\n",
            "\n",
            "📋 **Core Objectives:**\n",
            "1. Promote access to quality education for underprivileged learners\n",
            "2. Raise awareness and provide support for mental health and psychosocial well-being\n",
            "3. Implement poverty reduction and economic empowerment initiatives\n",
            "4. Promote preventive and curative healthcare initiatives\n",
            "5. Mobilize resources for community development projects\n",
            "6. Collaborate with government and other organizations for sustainable development\n",
            "\n",
            "🏢 **Status:** Non-political, non-profit, and non-sectarian charitable organization registered under the laws of Kenya\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "location",
        concat!(
            "**Mwalimu Hope Foundation Location:**\n",
            "\n",
            "🏢 **Physical Address:**\n",
            "Meghon Plaza, Bungoma Town\n",
            "Along Moi Avenue\n",
            "\n",
            "📮 **Postal Address:**\n",
            "P.O. Box 2072-50200\n",
            "Bungoma, Kenya\n",
            "\n",
            "📧 **Email:**\n",
            "simiyuleviticus93@gmail.com\n",
            "\n",
            "📞 **Contact Numbers:**\n",
            "• CEO/Founder: 0721660901\n",
            "• Secretary: 0792480017\n",
            "• Advisor: 0727085726\n",
            "\n",
            "🗺️ **How to Find Us:**\n",
            "Located in the heart of Bungoma Town at Meghon Plaza, easily accessible along Moi Avenue. Our office is open for visits and consultations.\n",
            "\n",
            "🕒 **Office Hours:**\n",
            "Monday - Friday: 8:00 AM - 5:00 PM\n",
            "Saturday: 9:00 AM - 1:00 PM",
        ),
    ),
    (
        "membership",
        concat!(
            "**Join Mwalimu Hope Foundation:**\n",
            "\n",
            "👥 **Membership Details:**\n",
            "• Open to any person who supports the objectives of the Foundation\n",
            "• No discrimination based on background or affiliation\n",
            "\n",
            "✅ **Member Rights:**\n",
            "• Participation in Foundation activities\n",
            "• Voting rights in decision-making\n",
            "• Access to Foundation reports and updates\n",
            "• Networking opportunities\n",
            "• Direct impact on community programs\n",
            "\n",
            "📋 **Member Duties:**\n",
            "• Uphold the Foundation Constitution\n",
            "• Support Foundation objectives and activities\n",
            "• Act in the best interest of the Foundation\n",
            "• Maintain integrity and professionalism\n",
            "\n",
            "📝 **How to Join:**\n",
            "1. Contact us at simiyuleviticus93@gmail.com\n",
            "2. Express your interest in joining\n",
            "3. Complete the membership process\n",
            "4. Attend orientation and start contributing!\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "governance",
        concat!(
            "**Mwalimu Hope Foundation Governance:**\n",
            "\n",
            "🏛️ **Board Structure:**\n",
            "• Chief Executive Officer (CEO)/Founder\n",
            "• Secretary\n",
            "• Treasurer\n",
            "• Two Board Members\n",
            "• Advisors (non-voting)\n",
            "\n",
            "⏰ **Tenure:**\n",
            "• Officials serve for three (3) years\n",
            "• Renewable upon re-election\n",
            "\n",
            "📅 **Meetings:**\n",
            "• Annual General Meeting (AGM) - held annually\n",
            "• Board Meetings - held quarterly\n",
            "• Quorum: two-thirds of members required\n",
            "\n",
            "🤝 **Decision Making:**\n",
            "• Democratic process with member participation\n",
            "• Two-thirds majority for major decisions\n",
            "• Transparent and accountable governance\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "values",
        concat!(
            "**Mwalimu Hope Foundation Values:**\n",
            "\n",
            "🎯 **Core Values:**\n",
            "• **Integrity** - Honest and ethical in all dealings\n",
            "• **Accountability** - Transparent and responsible to stakeholders\n",
            "• **Inclusivity** - Open to all regardless of background\n",
            "• **Professionalism** - High standards in all activities\n",
            "• **Service to Humanity** - Dedicated to helping others\n",
            "\n",
            "📋 **Principles:**\n",
            "• Non-political, non-profit, and non-sectarian\n",
            "• Committed to sustainable development\n",
            "• Focused on community empowerment\n",
            "• Transparent and accountable operations\n",
            "• Collaborative approach with partners\n",
            "\n",
            "🌟 **Commitment:**\n",
            "All members commit to uphold the Constitution and act in the best interest of the Foundation.\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "events",
        concat!(
            "**Mwalimu Hope Foundation Events:**\n",
            "\n",
            "📅 **Regular Meetings:**\n",
            "• Annual General Meeting (AGM) - held annually\n",
            "• Board Meetings - held quarterly\n",
            "• Community engagement sessions\n",
            "\n",
            "🎯 **Program Events:**\n",
            "• Educational workshops and training\n",
            "• Mental health awareness campaigns\n",
            "• Healthcare initiatives and health drives\n",
            "• Community development activities\n",
            "• Fundraising events\n",
            "• Scholarship award ceremonies\n",
            "\n",
            "📋 **Event Information:**\n",
            "• Most events are open to the public\n",
            "• Some events may require registration\n",
            "• Community events are often free\n",
            "• Special events may have nominal fees\n",
            "\n",
            "📞 **For Event Details:**\n",
            "Contact: simiyuleviticus93@gmail.com\n",
            "Phone: 0721660901",
        ),
    ),
    (
        "financial",
        concat!(
            "**Mwalimu Hope Foundation Finances:**\n",
            "\n",
            "💰 **Funding Sources:**\n",
            "• Donations from individuals and organizations\n",
            "• Grants from government and international bodies\n",
            "• Fundraising activities and events\n",
            "• Community contributions\n",
            "\n",
            "📊 **Fund Utilization:**\n",
            "• Remuneration and allowances for executive leaders\n",
            "• Operational costs and administrative expenses\n",
            "• Welfare activities and community programs\n",
            "• Education and healthcare initiatives\n",
            "• Poverty alleviation projects\n",
            "\n",
            "✅ **Financial Management:**\n",
            "• All funds are properly banked\n",
            "• Annual audits conducted\n",
            "• Transparent financial reporting\n",
            "• Accountable use of resources\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "legal",
        concat!(
            "**Mwalimu Hope Foundation Legal Status:**\n",
            "\n",
            "📜 **Registration:**\n",
            "• Registered under the laws of Kenya\n",
            "• Non-political, non-profit, and non-sectarian\n",
            "• Charitable organization status\n",
            "\n",
            "⚖️ **Legal Framework:**\n",
            "• Governed by Kenyan law\n",
            "• Compliant with all regulations\n",
            "• Transparent operations\n",
            "\n",
            "🤝 **Dispute Resolution:**\n",
            "1. **Negotiation** - First step in conflict resolution\n",
            "2. **Mediation** - Third-party facilitated discussions\n",
            "3. **Arbitration** - Formal dispute resolution process\n",
            "4. **Court** - Last resort for unresolved disputes\n",
            "\n",
            "🛡️ **Legal Protection:**\n",
            "• Officials protected from liability for good faith actions\n",
            "• Foundation assumes liability for authorized obligations\n",
            "• Clear legal framework for operations\n",
            "\n",
            "📞 **Contact:** simiyuleviticus93@gmail.com",
        ),
    ),
    (
        "leadership",
        concat!(
            "**Mwalimu Hope Foundation Leadership Team:**\n",
            "\n",
            "👨‍💼 **CEO/Founder:**\n",
            "**Simiyu Leviticus**\n",
            "• ID: 32813494\n",
            "• Phone: 0721660901\n",
            "• Email: simiyuleviticus93@gmail.com\n",
            "• Role: Chief Executive Officer and Founder\n",
            "\n",
            "👩‍💼 **Secretary:**\n",
            "**Anjeline Nafula Juma**\n",
            "• ID: 33245059\n",
            "• Phone: 0792480017\n",
            "• Role: Secretary and Administrative Officer\n",
            "\n",
            "👨‍⚕️ **Advisor:**\n",
            "**Dr. Mbiti Mwondi**\n",
            "• Phone: 0727085726\n",
            "• Qualifications: Medical Doctor, Mental Health Advocate\n",
            "• Specialization: Psychiatric Resident (UoN), Public Health & Digital Health Expert\n",
            "• Role: Medical and Mental Health Advisor\n",
            "\n",
            "🏛️ **Board Structure:**\n",
            "• CEO/Founder (Simiyu Leviticus)\n",
            "• Secretary (Anjeline Nafula Juma)\n",
            "• Treasurer (To be appointed)\n",
            "• Two Board Members (To be appointed)\n",
            "• Advisors (Dr. Mbiti Mwondi and others)\n",
            "\n",
            "📞 **Contact Leadership:**\n",
            "For specific inquiries, contact the relevant official directly using their phone numbers above.",
        ),
    ),
    (
        "registration",
        concat!(
            "**Mwalimu Hope Foundation Registration Status:**\n",
            "\n",
            "📋 **Registration Status:**\n",
            "• **Status**: Application submitted to NGO Coordination Board\n",
            "• **Authority**: NGO Coordination Board, Kenya\n",
            "• **Address**: P.O. Box 44617-00100, Nairobi, Kenya\n",
            "• **Registration Number**: Pending (will be assigned upon approval)\n",
            "\n",
            "📄 **Registration Process:**\n",
            "• Application submitted for charitable foundation registration\n",
            "• Operating as non-profit organization\n",
            "• Focus: Education, mental health awareness, poverty alleviation, community empowerment\n",
            "• Target: Vulnerable groups and sustainable development\n",
            "\n",
            "📋 **Required Documents Submitted:**\n",
            "✅ Proposed constitution of the foundation\n",
            "✅ List of proposed officials with ID copies and passport photos\n",
            "✅ Minutes of the meeting resolving to register the foundation\n",
            "✅ Proposed organizational structure\n",
            "✅ Physical and postal address details\n",
            "\n",
            "🏢 **Official Status:**\n",
            "• Non-political, non-profit, and non-sectarian\n",
            "• Charitable foundation under Kenyan law\n",
            "• Application under review by NGO Coordination Board\n",
            "\n",
            "📞 **Verification:**\n",
            "Contact NGO Coordination Board for official verification of registration status.",
        ),
    ),
    (
        "general",
        concat!(
            "**About Mwalimu Hope Foundation:**\n",
            "\n",
            "🏛️ **Organization:**\n",
            "Mwalimu Hope Foundation is a charitable foundation established to champion education, mental health awareness, poverty alleviation, and community empowerment initiatives in Kenya.\n",
            "\n",
            "📅 **Established:**\n",
            "Constitution adopted on 25th August 2025 at Bungoma Town\n",
            "\n",
            "🎯 **Focus Areas:**\n",
            "• Education for underprivileged learners\n",
            "• Mental health awareness and support\n",
            "• Poverty reduction and economic empowerment\n",
            "• Healthcare initiatives\n",
            "• Community development\n",
            "• Resource mobilization\n",
            "\n",
            "🌍 **Service Area:**\n",
            "Primarily Bungoma County with expanding reach to neighboring areas\n",
            "\n",
            "📞 **Contact:**\n",
            "simiyuleviticus93@gmail.com\n",
            "Phone: 0721660901\n",
            "Address: Meghon Plaza, Bungoma Town",
        ),
    ),
];

/// Builds the foundation corpus compiled into the binary.
pub fn foundation_corpus() -> Corpus {
    let documents = QUESTION_GROUPS
        .iter()
        .flat_map(|(intent, questions)| {
            questions
                .iter()
                .map(move |text| CorpusDocument::new(*text, *intent))
        })
        .collect();

    let responses: IntentResponses = RESPONSES
        .iter()
        .map(|(intent, reply)| (intent.to_string(), reply.to_string()))
        .collect();

    Corpus::new(documents, responses, DEFAULT_INTENT)
}
