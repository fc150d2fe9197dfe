//! Static test vectors shared by the integration tests.
//!
//! The BIP-340 vectors come from the bitcoin BIPs repository
//! (bip-0340/test-vectors.csv); the key-sort, key-aggregation, nonce and
//! partial-signature vectors come from the BIP-327 reference vectors.

/// BIP-340 signing vectors: (sk, pk, aux, msg, sig).
pub const BIP340_SIGN_VECTORS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "0000000000000000000000000000000000000000000000000000000000000003",
        "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "0000000000000000000000000000000000000000000000000000000000000000",
        "E907831F80848D1069A5371B402410364BDF1C5F8307B0084C55F1CE2DCA821525F66A4A85EA8B71E482A74F382D2CE5EBEEE8FDB2172F477DF4900D310536C0",
    ),
    (
        "B7E151628AED2A6ABF7158809CF4F3C762E7160F38B4DA56A784D9045190CFEF",
        "DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        "0000000000000000000000000000000000000000000000000000000000000001",
        "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        "6896BD60EEAE296DB48A229FF71DFE071BDE413E6D43F917DC8DCF8C78DE33418906D11AC976ABCCB20B091292BFF4EA897EFCB639EA871CFA95F6DE339E4B0A",
    ),
    (
        "C90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B14E5C9",
        "DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EB8",
        "C87AA53824B4D7AE2EB035A2B5BBBCCC080E76CDC6D1692C4B0B62D798E6D906",
        "7E2D58D8B3BCDF1ABADEC7829054F90DDA9805AAB56C77333024B9D0A508B75C",
        "5831AAEED7B44BB74E5EAB94BA9D4294C49BCF2A60728D8B4C200F50DD313C1BAB745879A5AD954A72C45A91C3A51D3C7ADEA98D82F8481E0E1E03674A6F3FB7",
    ),
    (
        "0B432B2677937381AEF05BB02A66ECD012773062CF3FA2549E44F58ED2401710",
        "25D1DFF95105F5253C4022F628A996AD3A0D95FBF21D468A1B33F8C160D8F517",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF",
        "7EB0509757E246F19449885651611CB965ECC1A187DD51B64FDA1EDC9637D5EC97582B9CB13DB3933705B32BA982AF5AF25FD78881EBB32771FC5922EFC66EA3",
    ),
];

/// BIP-340 verification vectors: (pk, msg, sig, valid). Invalid public keys
/// and signatures must fail at parse time or verification, never panic.
pub const BIP340_VERIFY_VECTORS: &[(&str, &str, &str, bool)] = &[
    (
        "D69C3509BB99E412E68B0FE8544E72837DFA30746D8BE2AA65975F29D22DC7B9",
        "4DF3C3F68FCC83B27E9D42C90431A72499F17875C81A599B566C9889B9696703",
        "00000000000000000000003B78CE563F89A0ED9414F5AA28AD0D96D6795F9C6376AFB1548AF603B3EB45C9F8207DEE1060CB71C04E80F593060B07D28308D7F4",
        true,
    ),
    // Public key not on the curve.
    (
        "EEFDEA4CDB677750A420FEE807EACF21EB9898AE79B9768766E4FAA04A2D4A34",
        "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        "6CFF5C3BA86C69EA4B7376F31A9BCB4F74C1976089B2D9963DA2E5543E17776969E89B4C5564D00349106B8497785DD7D1D713A8AE82B32FA79D5F7FC407D39B",
        false,
    ),
    // Has-even-Y(R) is false.
    (
        "DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        "FFF97BD5755EEEA420453A14355235D382F6472F8568A18B2F057A14602975563CC27944640AC607CD107AE10923D9EF7A73C643E166BE5EBEAFA34B1AC553E2",
        false,
    ),
    // Negated message.
    (
        "DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        "1FA62E331EDBC21C394792D2AB1100A7B432B013DF3F6FF4F99FCB33E0E1515F28890B3EDB6E7189B630448B515CE4F8622A954CFE545735AAEA5134FCCDB2BD",
        false,
    ),
    // Negated s value.
    (
        "DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        "6CFF5C3BA86C69EA4B7376F31A9BCB4F74C1976089B2D9963DA2E5543E177769961764B3AA9B2FFCB6EF947B6887A226E8D7C93E00C5ED0C1834FF0D0C2E6DA6",
        false,
    ),
    // sig[0:32] is not a valid x coordinate.
    (
        "DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
        "243F6A8885A308D313198A2E03707344A4093822299F31D0082EFA98EC4E6C89",
        "0000000000000000000000000000000000000000000000000000000000000000123DDA8328AF9C23A94C1FEECFD123BA4FB73476F0D594DCB65C6425BD186051",
        false,
    ),
];

/// Key-sort vectors from BIP-327: plain keys in input order, and the
/// expected lexicographic order (duplicates stay adjacent).
pub const KEY_SORT_INPUT: &[&str] = &[
    "02DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EB8",
    "02F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
    "03DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
    "023590A94E768F8E1815C2F24B4D80A8E3149316C3518CE7B7AD338368D038CA66",
    "02DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EFF",
    "02DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EB8",
];

pub const KEY_SORT_EXPECTED: &[&str] = &[
    "023590A94E768F8E1815C2F24B4D80A8E3149316C3518CE7B7AD338368D038CA66",
    "02DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EB8",
    "02DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EB8",
    "02DD308AFEC5777E13121FA72B9CC1B7CC0139715309B086C960E18FD969774EFF",
    "02F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
    "03DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
];

/// Key-aggregation vector key pool. Indices 3-5 are deliberately invalid:
/// an x with no curve point, an x at or above the field prime, and a bad
/// tag byte.
pub const KEY_AGG_PUBKEYS: &[&str] = &[
    "02F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
    "03DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA659",
    "023590A94E768F8E1815C2F24B4D80A8E3149316C3518CE7B7AD338368D038CA66",
    "020000000000000000000000000000000000000000000000000000000000000005",
    "02FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC30",
    "04F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
    "03935F972DA013F80AE011890FA89B67A27B7BE6CCB24D3274D18B2D4067F261A9",
];

pub const KEY_AGG_TWEAKS: &[&str] = &[
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
    "252E4BD67410A76CDF933D30EAA1608214037F1B105A013ECCD3C5C184A6110B",
];

/// Valid aggregations: (key indices, expected x-only aggregate).
pub const KEY_AGG_VALID: &[(&[usize], &str)] = &[
    (
        &[0, 1, 2],
        "90539EEDE565F5D054F32CC0C220126889ED1E5D193BAF15AEF344FE59D4610C",
    ),
    (
        &[2, 1, 0],
        "6204DE8B083426DC6EAF9502D27024D53FC826BF7D2012148A0575435DF54B2B",
    ),
    (
        &[0, 0, 0],
        "B436E3BAD62B8CD409969A224731C193D051162D8C5AE8B109306127DA3AA935",
    ),
    (
        &[0, 0, 1, 1],
        "69BC22BFA5D106306E48A20679DE1D7389386124D07571D0D872686028C26A3E",
    ),
];

/// MuSig2 partial-signing vectors (BIP-327 sign/verify vectors).
pub const MUSIG_SK: &str = "7FB9E0E687ADA1EEBF7ECFE2F21E73EBDB51A7D450948DFE8D76D7F2D1007671";

/// Key pool for the signing vectors. Index 3 has an x with no curve point.
pub const MUSIG_PUBKEYS: &[&str] = &[
    "03935F972DA013F80AE011890FA89B67A27B7BE6CCB24D3274D18B2D4067F261A9",
    "02F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
    "02DFF1D77F2A671C5F36183726DB2341BE58FEAE1DA2DECED843240F7B502BA661",
    "020000000000000000000000000000000000000000000000000000000000000007",
];

pub const MUSIG_SECNONCE: &str = "508B81A611F100A6B2B6B29656590898AF488BCF2E1F55CF22E5CFB84421FE61FA27FD49B1D50085B481285E1CA205D55C82CC1B31FF5CD54A489829355901F703935F972DA013F80AE011890FA89B67A27B7BE6CCB24D3274D18B2D4067F261A9";

pub const MUSIG_PNONCES: &[&str] = &[
    "0337C87821AFD50A8644D820A8F3E02E499C931865C2360FB43D0A0D20DAFE07EA0287BF891D2A6DEAEBADC909352AA9405D1428C15F4B75F04DAE642A95C2548480",
    "0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F817980279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    "032DE2662628C90B03F5E720284EB52FF7D71F4284F627B68A853D78C78E1FFE9303E4C5524E83FFE1493B9077CF1CA6BEB2090C93D930321071AD40B2F44E599046",
    "0237C87821AFD50A8644D820A8F3E02E499C931865C2360FB43D0A0D20DAFE07EA0387BF891D2A6DEAEBADC909352AA9405D1428C15F4B75F04DAE642A95C2548480",
    "0200000000000000000000000000000000000000000000000000000000000000090287BF891D2A6DEAEBADC909352AA9405D1428C15F4B75F04DAE642A95C2548480",
];

/// Aggregate-nonce pool. Indices 2-4 are invalid encodings: a bad tag byte,
/// an x with no curve point, and an x at or above the field prime.
pub const MUSIG_AGGNONCES: &[&str] = &[
    "028465FCF0BBDBCF443AABCCE533D42B4B5A10966AC09A49655E8C42DAAB8FCD61037496A3CC86926D452CAFCFD55D25972CA1675D549310DE296BFF42F72EEEA8C9",
    "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    "048465FCF0BBDBCF443AABCCE533D42B4B5A10966AC09A49655E8C42DAAB8FCD61037496A3CC86926D452CAFCFD55D25972CA1675D549310DE296BFF42F72EEEA8C9",
    "028465FCF0BBDBCF443AABCCE533D42B4B5A10966AC09A49655E8C42DAAB8FCD61020000000000000000000000000000000000000000000000000000000000000009",
    "028465FCF0BBDBCF443AABCCE533D42B4B5A10966AC09A49655E8C42DAAB8FCD6102FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC30",
];

pub const MUSIG_MSGS: &[&str] = &[
    "F95466D086770E689964664219266FE5ED215C92AE20BAB5C9D79ADDDDF3C0CF",
    "",
    "2626262626262626262626262626262626262626262626262626262626262626262626262626",
];

/// A valid partial-signing case.
pub struct MusigSignCase {
    pub key_indices: &'static [usize],
    pub nonce_indices: &'static [usize],
    pub agg_nonce_index: usize,
    pub msg_index: usize,
    pub signer_index: usize,
    pub expected: &'static str,
}

pub const MUSIG_SIGN_VALID: &[MusigSignCase] = &[
    MusigSignCase {
        key_indices: &[0, 1, 2],
        nonce_indices: &[0, 1, 2],
        agg_nonce_index: 0,
        msg_index: 0,
        signer_index: 0,
        expected: "012ABBCB52B3016AC03AD82395A1A415C48B93DEF78718E62A7A90052FE224FB",
    },
    MusigSignCase {
        key_indices: &[1, 0, 2],
        nonce_indices: &[1, 0, 2],
        agg_nonce_index: 0,
        msg_index: 0,
        signer_index: 1,
        expected: "9FF2F7AAA856150CC8819254218D3ADEEB0535269051897724F9DB3789513A52",
    },
    MusigSignCase {
        key_indices: &[1, 2, 0],
        nonce_indices: &[1, 2, 0],
        agg_nonce_index: 0,
        msg_index: 0,
        signer_index: 2,
        expected: "FA23C359F6FAC4E7796BB93BC9F0532A95468C539BA20FF86D7C76ED92227900",
    },
    MusigSignCase {
        key_indices: &[0, 1],
        nonce_indices: &[0, 3],
        agg_nonce_index: 1,
        msg_index: 0,
        signer_index: 0,
        expected: "AE386064B26105404798F75DE2EB9AF5EDA5387B064B83D049CB7C5E08879531",
    },
    MusigSignCase {
        key_indices: &[0, 1, 2],
        nonce_indices: &[0, 1, 2],
        agg_nonce_index: 0,
        msg_index: 1,
        signer_index: 0,
        expected: "D7D63FFD644CCDA4E62BC2BC0B1D02DD32A1DC3030E155195810231D1037D82D",
    },
    MusigSignCase {
        key_indices: &[0, 1, 2],
        nonce_indices: &[0, 1, 2],
        agg_nonce_index: 0,
        msg_index: 2,
        signer_index: 0,
        expected: "E184351828DA5094A97C79CABDAAA0BFB87608C32E8829A4DF5340A6F243B78C",
    },
];

/// Partial signatures that must fail verification for signer 0 over
/// `MUSIG_MSGS[0]` with keys `[0, 1, 2]` and nonces `[0, 1, 2]`. The last
/// one equals the group order and must already fail to decode.
pub const MUSIG_PSIG_INVALID: &[&str] = &[
    "97AC833ADCB1AFA42EBF9E0725616F3C9A0D5B614F6FE283CEAAA37A8FFAF406",
    "68537CC5234E505BD14061F8DA9E90C220A181855FD8BDB7F127BB12403B4D3B",
    "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
];
