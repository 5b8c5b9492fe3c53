//! @acp:module "Baseline Bank"
//! @acp:summary "Questions included for every user regardless of answers"
//! @acp:domain catalog
//! @acp:layer data

use super::Question;

const CREDENTIALS: &str = "Credentials & Fiduciary Duty";
const FEES: &str = "Fee Transparency";
const PHILOSOPHY: &str = "Investment Philosophy & Conflicts";
const TRACK_RECORD: &str = "Track Record & References";

pub(super) static BASELINE: &[Question] = &[
    // Credentials & fiduciary duty
    Question {
        id: "q_fiduciary",
        category: CREDENTIALS,
        text: "Are you a fiduciary 100% of the time, and will you provide that in writing?",
        why_matters: "Some advisors are only fiduciaries \"when providing advice\" but not when selling products. Get it in writing.",
        red_flags: &[
            "\"I act in your best interest\" (vague, not fiduciary)",
            "\"When I'm giving advice, yes\" (loophole for product sales)",
            "\"That's complicated...\" (should be a simple yes)",
        ],
        green_flags: &[
            "\"Yes, I'm an RIA and fiduciary at all times. Here's our ADV Part 2.\"",
            "\"Yes, and I'll sign a fiduciary oath for you.\"",
        ],
    },
    Question {
        id: "q_licenses",
        category: CREDENTIALS,
        text: "What licenses and certifications do you hold, and what's the difference between them?",
        why_matters: "A Series 65 (RIA) is different from Series 7 (broker). CFP® is a gold standard; insurance-only licenses are limited.",
        red_flags: &[
            "Can't clearly explain their licenses",
            "Only has insurance licenses (limited scope)",
            "Defensive or evasive about credentials",
        ],
        green_flags: &[
            "Clear explanation: \"CFP®, CFA, and Series 65 RIA\"",
            "Can explain the scope and limitations of each credential",
        ],
    },
    Question {
        id: "q_registered",
        category: CREDENTIALS,
        text: "Are you or your firm registered with the SEC or state as a Registered Investment Advisor (RIA)?",
        why_matters: "RIAs have a legal fiduciary duty. Brokers only need to meet a lower \"suitability\" standard.",
        red_flags: &[
            "\"No, I'm a broker-dealer representative\"",
            "Confusion about registration status",
        ],
        green_flags: &[
            "\"Yes, we're registered with the SEC as an RIA. You can verify us on the SEC IAPD.\"",
        ],
    },
    Question {
        id: "q_conflicts",
        category: CREDENTIALS,
        text: "Do you earn any commissions, bonuses, or other compensation from products you recommend to me?",
        why_matters: "Commissions create conflicts of interest. Fee-only advisors don't have this conflict.",
        red_flags: &[
            "\"A small percentage\" (any commission is a conflict)",
            "Evasive or unclear",
            "\"Only standard industry commissions\"",
        ],
        green_flags: &[
            "\"No, I'm fee-only. I only earn from the fees you pay directly.\"",
            "\"Yes, we disclose all compensation and it's in writing.\"",
        ],
    },
    // Fee transparency
    Question {
        id: "q_total_cost",
        category: FEES,
        text: "How do you get paid, and how much will I pay in total each year—including all fees, commissions, and product costs?",
        why_matters: "You need to understand the full cost. Some advisors hide fees in fund expenses or spreads.",
        red_flags: &[
            "\"It's very competitive\" (not a specific answer)",
            "Refuses to provide a written fee schedule",
            "Changes numbers when pressed",
        ],
        green_flags: &[
            "\"1% AUM annually, billed quarterly, with no product commissions. Here's our written fee schedule.\"",
            "\"Flat $5,000/year planning fee, no AUM fees or commissions.\"",
        ],
    },
    Question {
        id: "q_fee_structure",
        category: FEES,
        text: "Will I pay you a percentage of assets under management (AUM), a flat fee, hourly rate, or commissions?",
        why_matters: "Different fee structures create different incentives. AUM aligns with growth, flat fees align with planning.",
        red_flags: &[
            "Vague or variable pricing",
            "Suggests commission-based products without transparency",
        ],
        green_flags: &[
            "\"We offer three options: 0.75% AUM for accounts over $250K, flat fees for planning, or hourly ($300/hr).\"",
        ],
    },
    Question {
        id: "q_hidden_fees",
        category: FEES,
        text: "Are there any soft-dollar arrangements, 12b-1 fees, revenue-sharing with custodians, or other hidden costs I should know about?",
        why_matters: "These are hidden payments that create conflicts even in \"fee-only\" arrangements.",
        red_flags: &[
            "\"I don't think so\" (should be confident)",
            "Doesn't understand the question",
        ],
        green_flags: &[
            "\"No, we have no soft-dollar arrangements. All compensation is transparent.\"",
        ],
    },
    Question {
        id: "q_account_minimum",
        category: FEES,
        text: "Are there any account minimums, and what happens if I fall below them?",
        why_matters: "Some advisors drop you or reduce service if accounts shrink. This matters especially for smaller investors.",
        red_flags: &[
            "\"We prefer at least $250K\"",
            "Says you'll be \"transitioned to another advisor\"",
        ],
        green_flags: &[
            "\"We have no minimums. Everyone gets the same level of service.\"",
            "\"Our minimum is $50K, and if you fall below it, fees go to a flat $100/month.\"",
        ],
    },
    Question {
        id: "q_fee_transparency_special",
        category: FEES,
        text: "What specific services are included in your fee, and what costs extra?",
        why_matters: "Advisors often charge separately for tax planning, estate planning, or financial planning. Know what's included.",
        red_flags: &[
            "\"Everything is included\" (unlikely)",
            "Vague about what's extra",
        ],
        green_flags: &[
            "\"Financial planning is included. Tax prep with a CPA is extra at $2,000/year.\"",
        ],
    },
    // Investment philosophy & conflicts
    Question {
        id: "q_philosophy",
        category: PHILOSOPHY,
        text: "What's your investment philosophy, and how do you decide between active and passive investing?",
        why_matters: "Passive (low-cost index funds) often outperforms active. Beware advisors who overcomplicate strategies.",
        red_flags: &[
            "Always recommends active management",
            "Can't articulate a clear philosophy",
            "Dismisses index funds as \"unsophisticated\"",
        ],
        green_flags: &[
            "\"We use low-cost index funds as the core, with strategic active managers for specialized areas.\"",
            "\"We believe most investors are better served by passive, diversified index portfolios.\"",
        ],
    },
    Question {
        id: "q_proprietary",
        category: PHILOSOPHY,
        text: "Do you sell proprietary products or have partnerships with product companies that benefit you financially?",
        why_matters: "Proprietary products often have higher fees. You need to know if they're recommended for your benefit or theirs.",
        red_flags: &[
            "Recommends their own products excessively",
            "Defensive about proprietary holdings",
        ],
        green_flags: &[
            "\"No, we're independent and use third-party funds and investments.\"",
            "\"We don't have any proprietary products. All recommendations are unbiased.\"",
        ],
    },
    Question {
        id: "q_products_concentration",
        category: PHILOSOPHY,
        text: "What percentage of your clients have annuities or permanent life insurance, and why?",
        why_matters: "If >50% have these, they may be pushed as commission-generators. These are rarely appropriate for many investors.",
        red_flags: &[
            "\"Most of them\" (indicates over-reliance on commissions)",
            "Can't justify the usage rate",
        ],
        green_flags: &[
            "\"Less than 10%. We only use them when appropriate for specific, limited situations.\"",
        ],
    },
    Question {
        id: "q_portfolio_volatility",
        category: PHILOSOPHY,
        text: "How do you approach portfolio volatility and market downturns? Can you show me how your portfolio performed in 2008 and March 2020?",
        why_matters: "You need to know their real-world track record and risk management approach during crises.",
        red_flags: &["Avoids the question", "Blames clients for bad outcomes"],
        green_flags: &[
            "\"Our average client portfolio fell 22% in 2020, recovered within 18 months. Here's the historical data.\"",
        ],
    },
    // Track record & references
    Question {
        id: "q_references",
        category: TRACK_RECORD,
        text: "Can you provide 3 references from clients in a situation similar to mine?",
        why_matters: "References reveal service quality and whether they actually serve clients like you.",
        red_flags: &["Refuses or hesitates", "\"I'd need to ask permission first\""],
        green_flags: &[
            "\"Absolutely. Here are 3 clients who match your profile. Feel free to contact them directly.\"",
        ],
    },
    Question {
        id: "q_regulatory_history",
        category: TRACK_RECORD,
        text: "Have you or your firm ever been disciplined by regulators, and can I check your record independently?",
        why_matters: "Always verify independently on BrokerCheck and SEC IAPD. This is non-negotiable.",
        red_flags: &["Defensive or evasive", "\"Nothing serious\""],
        green_flags: &["\"No disciplinary history. Here's the SEC IAPD link to verify.\""],
    },
    Question {
        id: "q_complaint_history",
        category: TRACK_RECORD,
        text: "What was your experience during major market downturns? How did you communicate with clients?",
        why_matters: "Communication during crises is critical. Bad advisors disappear when markets tank.",
        red_flags: &["Can't recall what they did", "Blames clients"],
        green_flags: &[
            "\"We held client meetings every month, rebalanced portfolios, and sent regular updates.\"",
        ],
    },
];
