//! @acp:module "Conditional Groups"
//! @acp:summary "Question groups appended when their trigger rule matches"
//! @acp:domain catalog
//! @acp:layer data

use super::Question;

pub(super) static SERVICE_MODEL: &[Question] = &[Question {
    id: "q_service_level",
    category: "Service Model Fit",
    text: "If I have less than $100,000, what services will I actually receive for the fee I pay?",
    why_matters: "Many advisors don't actively manage small accounts but still charge full fees. Some assign you to junior staff.",
    red_flags: &["\"Limited portfolio review\"", "\"Mostly self-service\""],
    green_flags: &[
        "\"Same service as all clients: quarterly reviews, rebalancing, and direct access.\"",
    ],
}];

pub(super) static ADVANCED_SERVICES: &[Question] = &[
    Question {
        id: "q_estate_planning",
        category: "Advanced Services",
        text: "What experience do you have with estate planning, trusts, and multi-generational wealth transfer?",
        why_matters: "High-net-worth individuals need comprehensive estate planning strategies.",
        red_flags: &["\"I refer clients to attorneys\"", "Limited expertise shown"],
        green_flags: &[
            "\"We coordinate directly with your CPA and estate attorney on comprehensive planning.\"",
        ],
    },
    Question {
        id: "q_tax_strategies",
        category: "Advanced Services",
        text: "How do you handle tax-loss harvesting, Roth conversions, charitable gifting, and other advanced tax strategies?",
        why_matters: "These strategies can save substantial money for wealthy clients.",
        red_flags: &["\"We don't focus on tax strategies\""],
        green_flags: &[
            "\"Tax optimization is core to our planning. We coordinate with your CPA on strategy.\"",
        ],
    },
    Question {
        id: "q_alternative_investments",
        category: "Advanced Services",
        text: "Do you recommend alternative investments (hedge funds, private equity, real estate)? How do you justify their fees?",
        why_matters: "Alternatives have high fees and illiquidity. Their benefits need to be clear.",
        red_flags: &[
            "Pushes alternatives without justification",
            "Can't explain the benefit",
        ],
        green_flags: &[
            "\"We use alternatives sparingly in specific circumstances where they add diversification value.\"",
        ],
    },
];

pub(super) static HOLISTIC_PLANNING: &[Question] = &[Question {
    id: "q_debt_foundation",
    category: "Holistic Planning",
    text: "Are you trained to help with debt payoff strategy, emergency funds, and financial foundation-building?",
    why_matters: "Not all advisors are good at foundational financial planning. Some only focus on investments.",
    red_flags: &[
        "\"We focus on investments, not budgeting\"",
        "Dismisses debt concerns",
    ],
    green_flags: &[
        "\"We start with comprehensive financial planning before touching investments.\"",
    ],
}];

pub(super) static TAX_CREDENTIALS: &[Question] = &[Question {
    id: "q_tax_credentials",
    category: "Tax Credentials",
    text: "Do you have a CPA or EA certification, or do you partner with a CPA who specializes in tax planning?",
    why_matters: "Tax optimization requires deep tax knowledge. Not all investment advisors have this expertise.",
    red_flags: &["\"Not required\"", "No CPA partnership"],
    green_flags: &[
        "\"I'm a CFP® and CPA. We do comprehensive tax planning year-round.\"",
        "\"We work directly with your CPA on integrated tax and investment strategy.\"",
    ],
}];

pub(super) static SPECIALIZED_EXPERIENCE: &[Question] = &[Question {
    id: "q_special_situations",
    category: "Specialized Experience",
    text: "Have you helped clients through similar situations (inheritance, divorce, business sale)? Can you share examples?",
    why_matters: "These are specialized situations requiring expertise. You need to know they've done this before.",
    red_flags: &["\"No specific experience\"", "Vague examples"],
    green_flags: &[
        "\"I've handled 20+ business sales and helped clients optimize the proceeds.\"",
    ],
}];

pub(super) static FEE_EDUCATION: &[Question] = &[
    Question {
        id: "q_commission_risk",
        category: "Fee Education & Red Flags",
        text: "Can you explain the difference between fiduciary and suitability standards, and why it matters to me?",
        why_matters: "Understanding this is critical. Suitability is a much lower standard than fiduciary.",
        red_flags: &["Can't explain clearly", "Dismisses the difference"],
        green_flags: &[
            "\"Fiduciary means I must act in your best interest at all times. Suitability just means the product isn't unsuitable. It's a big difference.\"",
        ],
    },
    Question {
        id: "q_commission_products",
        category: "Fee Education & Red Flags",
        text: "What's your typical client makeup for annuities, life insurance, and mutual funds? Are these due to client needs or commission opportunities?",
        why_matters: "This reveals if products are sold based on client needs or advisor compensation.",
        red_flags: &[
            "High concentration of commission products",
            "Can't distinguish need vs. commission",
        ],
        green_flags: &[
            "\"We use commission products very rarely, only when they truly fit the client's needs.\"",
        ],
    },
];

pub(super) static PRODUCT_COMPLEXITY: &[Question] = &[
    Question {
        id: "q_product_complexity",
        category: "Product Complexity Warnings",
        text: "Do you recommend complex products like structured notes, inverse ETFs, or other derivatives to beginning investors?",
        why_matters: "Beginners should use simple, transparent products. Complex products hide fees and risk.",
        red_flags: &[
            "\"Structured notes are great for diversification\"",
            "Recommends options/derivatives to beginners",
        ],
        green_flags: &[
            "\"For beginners, we stick with index funds and simple, transparent products.\"",
        ],
    },
    Question {
        id: "q_fee_impact_beginner",
        category: "Product Complexity Warnings",
        text: "Can you show me how fees impact my long-term returns using specific examples?",
        why_matters: "Beginners need to understand that 1% fee difference = 30% less wealth over 30 years.",
        red_flags: &["Dismisses fee impact", "Can't calculate examples"],
        green_flags: &[
            "\"A 1% fee difference compounds to 30% less wealth over 30 years. We prioritize low-cost strategies.\"",
        ],
    },
];

pub(super) static BUSINESS_OWNER: &[Question] = &[
    Question {
        id: "q_business_retirement",
        category: "Business Owner Expertise",
        text: "What's your knowledge of business retirement plans like SEP IRAs, Solo 401(k)s, and cash balance plans?",
        why_matters: "Business owners have specialized retirement planning opportunities. Advisors must understand these.",
        red_flags: &["\"You should ask your CPA\"", "No knowledge of options"],
        green_flags: &[
            "\"I specialize in business owner planning. A Solo 401(k) lets you contribute $69K/year and take loans.\"",
        ],
    },
    Question {
        id: "q_business_taxation",
        category: "Business Owner Expertise",
        text: "How can you help me minimize taxes on business income and take money out of my business efficiently?",
        why_matters: "Tax optimization on business income can save tens of thousands per year.",
        red_flags: &["\"That's your CPA's job\""],
        green_flags: &[
            "\"We integrate with your CPA on salary vs. distribution decisions, C-corp vs. S-corp elections, and retirement contributions.\"",
        ],
    },
    Question {
        id: "q_business_succession",
        category: "Business Owner Expertise",
        text: "Do you have experience with business succession planning, valuations, and sale structuring?",
        why_matters: "Business sales are major financial events. You need an advisor who understands the nuances.",
        red_flags: &["\"Not really\""],
        green_flags: &[
            "\"I've helped 15+ business owners structure sales and manage the proceeds.\"",
        ],
    },
];

pub(super) static EQUITY_COMPENSATION: &[Question] = &[
    Question {
        id: "q_equity_strategy",
        category: "Equity Compensation",
        text: "Do you understand 83(b) elections, AMT calculations, and concentration risk for stock options and RSUs?",
        why_matters: "Equity compensation requires specialized knowledge. Wrong decisions cost thousands.",
        red_flags: &[
            "\"I'm not familiar with 83(b)\"",
            "Dismisses the complexity",
        ],
        green_flags: &[
            "\"Yes, we coordinate with your CPA on 83(b) elections, AMT impact, and vesting strategies.\"",
        ],
    },
    Question {
        id: "q_concentrated_position",
        category: "Equity Compensation",
        text: "If I have a concentrated position in company stock or RSUs, what's your approach to diversification?",
        why_matters: "Concentration risk is huge. You need a thoughtful diversification strategy.",
        red_flags: &[
            "\"Hold through vesting, then diversify\" (slow and risky)",
            "Dismisses concentration risk",
        ],
        green_flags: &[
            "\"We create a diversification plan that considers tax implications and volatility.\"",
        ],
    },
];

pub(super) static MAJOR_TRANSACTION: &[Question] = &[Question {
    id: "q_major_event_experience",
    category: "Major Transaction Experience",
    text: "Have you handled QDROs (Qualified Domestic Relations Orders) for divorces or inherited IRA distributions?",
    why_matters: "These situations have strict legal timelines. One mistake costs thousands.",
    red_flags: &["\"I haven't dealt with that\"", "Unsure about timelines"],
    green_flags: &[
        "\"Yes, I work closely with divorce attorneys on QDRO execution and inherited account setup.\"",
    ],
}];
