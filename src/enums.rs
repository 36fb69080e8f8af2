// 🏷️ Enumerations - closed sets of wire tokens
// Decoding keeps unknown tokens as `Unrecognized`; validation rejects them.

string_enum! {
    /// ISO 4217 currency code
    pub enum CurrencyCode {
        Aed = "AED",
        Afn = "AFN",
        All = "ALL",
        Amd = "AMD",
        Ang = "ANG",
        Aoa = "AOA",
        Ars = "ARS",
        Aud = "AUD",
        Awg = "AWG",
        Azn = "AZN",
        Bam = "BAM",
        Bbd = "BBD",
        Bdt = "BDT",
        Bgn = "BGN",
        Bhd = "BHD",
        Bif = "BIF",
        Bmd = "BMD",
        Bnd = "BND",
        Bob = "BOB",
        Brl = "BRL",
        Bsd = "BSD",
        Btn = "BTN",
        Bwp = "BWP",
        Byn = "BYN",
        Bzd = "BZD",
        Cad = "CAD",
        Cdf = "CDF",
        Chf = "CHF",
        Clp = "CLP",
        Cny = "CNY",
        Cop = "COP",
        Crc = "CRC",
        Cuc = "CUC",
        Cup = "CUP",
        Cve = "CVE",
        Czk = "CZK",
        Djf = "DJF",
        Dkk = "DKK",
        Dop = "DOP",
        Dzd = "DZD",
        Egp = "EGP",
        Ern = "ERN",
        Etb = "ETB",
        Eur = "EUR",
        Fjd = "FJD",
        Fkp = "FKP",
        Gbp = "GBP",
        Gel = "GEL",
        Ghs = "GHS",
        Gip = "GIP",
        Gmd = "GMD",
        Gnf = "GNF",
        Gtq = "GTQ",
        Gyd = "GYD",
        Hkd = "HKD",
        Hnl = "HNL",
        Hrk = "HRK",
        Htg = "HTG",
        Huf = "HUF",
        Idr = "IDR",
        Ils = "ILS",
        Inr = "INR",
        Iqd = "IQD",
        Irr = "IRR",
        Isk = "ISK",
        Jmd = "JMD",
        Jod = "JOD",
        Jpy = "JPY",
        Kes = "KES",
        Kgs = "KGS",
        Khr = "KHR",
        Kmf = "KMF",
        Kpw = "KPW",
        Krw = "KRW",
        Kwd = "KWD",
        Kyd = "KYD",
        Kzt = "KZT",
        Lak = "LAK",
        Lbp = "LBP",
        Lkr = "LKR",
        Lrd = "LRD",
        Lsl = "LSL",
        Lyd = "LYD",
        Mad = "MAD",
        Mdl = "MDL",
        Mga = "MGA",
        Mkd = "MKD",
        Mmk = "MMK",
        Mnt = "MNT",
        Mop = "MOP",
        Mru = "MRU",
        Mur = "MUR",
        Mvr = "MVR",
        Mwk = "MWK",
        Mxn = "MXN",
        Myr = "MYR",
        Mzn = "MZN",
        Nad = "NAD",
        Ngn = "NGN",
        Nio = "NIO",
        Nok = "NOK",
        Npr = "NPR",
        Nzd = "NZD",
        Omr = "OMR",
        Pab = "PAB",
        Pen = "PEN",
        Pgk = "PGK",
        Php = "PHP",
        Pkr = "PKR",
        Pln = "PLN",
        Pyg = "PYG",
        Qar = "QAR",
        Ron = "RON",
        Rsd = "RSD",
        Rub = "RUB",
        Rwf = "RWF",
        Sar = "SAR",
        Sbd = "SBD",
        Scr = "SCR",
        Sdg = "SDG",
        Sek = "SEK",
        Sgd = "SGD",
        Shp = "SHP",
        Sle = "SLE",
        Sll = "SLL",
        Sos = "SOS",
        Srd = "SRD",
        Ssp = "SSP",
        Stn = "STN",
        Svc = "SVC",
        Syp = "SYP",
        Szl = "SZL",
        Thb = "THB",
        Tjs = "TJS",
        Tmt = "TMT",
        Tnd = "TND",
        Top = "TOP",
        Try = "TRY",
        Ttd = "TTD",
        Twd = "TWD",
        Tzs = "TZS",
        Uah = "UAH",
        Ugx = "UGX",
        Usd = "USD",
        Uyu = "UYU",
        Uzs = "UZS",
        Ves = "VES",
        Vnd = "VND",
        Vuv = "VUV",
        Wst = "WST",
        Xaf = "XAF",
        Xcd = "XCD",
        Xof = "XOF",
        Xpf = "XPF",
        Yer = "YER",
        Zar = "ZAR",
        Zmw = "ZMW",
        Zwl = "ZWL",
    }
}

string_enum! {
    pub enum AccountClassification {
        Asset = "ASSET",
        Equity = "EQUITY",
        Expense = "EXPENSE",
        Liability = "LIABILITY",
        Revenue = "REVENUE",
    }
}

string_enum! {
    pub enum AccountStatus {
        Active = "ACTIVE",
        Pending = "PENDING",
        Inactive = "INACTIVE",
    }
}

string_enum! {
    /// Finer-grained account type reported by the remote system
    pub enum AccountType {
        Bank = "BANK",
        CreditCard = "CREDIT_CARD",
        AccountsPayable = "ACCOUNTS_PAYABLE",
        AccountsReceivable = "ACCOUNTS_RECEIVABLE",
        FixedAsset = "FIXED_ASSET",
        OtherAsset = "OTHER_ASSET",
        OtherCurrentAsset = "OTHER_CURRENT_ASSET",
        OtherExpense = "OTHER_EXPENSE",
        OtherIncome = "OTHER_INCOME",
        CostOfGoodsSold = "COST_OF_GOODS_SOLD",
        OtherCurrentLiability = "OTHER_CURRENT_LIABILITY",
        LongTermLiability = "LONG_TERM_LIABILITY",
        NonPosting = "NON_POSTING",
    }
}

string_enum! {
    /// Status of contacts, items and tracking categories
    pub enum ActivityStatus {
        Active = "ACTIVE",
        Archived = "ARCHIVED",
    }
}

string_enum! {
    pub enum AccountingPeriodStatus {
        Active = "ACTIVE",
        Inactive = "INACTIVE",
    }
}

string_enum! {
    pub enum AddressType {
        Billing = "BILLING",
        Shipping = "SHIPPING",
    }
}

string_enum! {
    pub enum InvoiceType {
        AccountsReceivable = "ACCOUNTS_RECEIVABLE",
        AccountsPayable = "ACCOUNTS_PAYABLE",
    }
}

string_enum! {
    pub enum PaymentType {
        AccountsReceivable = "ACCOUNTS_RECEIVABLE",
        AccountsPayable = "ACCOUNTS_PAYABLE",
    }
}

string_enum! {
    pub enum InvoiceStatus {
        Paid = "PAID",
        Draft = "DRAFT",
        Submitted = "SUBMITTED",
        PartiallyPaid = "PARTIALLY_PAID",
        Open = "OPEN",
        Void = "VOID",
    }
}

string_enum! {
    pub enum ExpenseReportStatus {
        Draft = "DRAFT",
        Submitted = "SUBMITTED",
        Approved = "APPROVED",
        Rejected = "REJECTED",
    }
}

string_enum! {
    pub enum PurchaseOrderStatus {
        Draft = "DRAFT",
        Submitted = "SUBMITTED",
        Authorized = "AUTHORIZED",
        Billed = "BILLED",
        Deleted = "DELETED",
    }
}

string_enum! {
    pub enum PostingStatus {
        Unposted = "UNPOSTED",
        Posted = "POSTED",
    }
}

string_enum! {
    pub enum CategoryType {
        Class = "CLASS",
        Department = "DEPARTMENT",
    }
}

string_enum! {
    /// Kind of document behind a general ledger transaction
    pub enum UnderlyingTransactionType {
        Invoice = "INVOICE",
        Expense = "EXPENSE",
        Transfer = "TRANSFER",
        JournalEntry = "JOURNAL_ENTRY",
        Payment = "PAYMENT",
        VendorCredit = "VENDOR_CREDIT",
        CreditNote = "CREDIT_NOTE",
        PurchaseOrder = "PURCHASE_ORDER",
    }
}

// ============================================================================
// TESTS
// ============================================================================
