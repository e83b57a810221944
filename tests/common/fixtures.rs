//! Static CSV corpora used across harnesses.
//!
//! Each corpus is a `&'static str` holding one export file in the vendor's
//! layout: a carrier banner, an account row, then per-kind sub-reports of a
//! header row, data rows, and a closing `Total` row. Values are chosen so
//! every coercion rule is exercised with a hand-checkable expected result.

/// One account, one voice sub-report. Includes a whitespace-only line (the
/// malformed placeholder row the parser must drop) and a `Subtotal` row.
pub const VOICE_LOG: &str = r#"AT&T Wireless Services,,,,,,,,,,
Monthly Statement,,,,,,,,,,
,555-123-4567
Voice Usage,,,,,,,,,,
Item,Day,Date,Time,Number Called,Min,Rate Code,Feature,Airtime Charge,LD/Add'l Charge,Total Charge
1,Saturday,07/06,09:14AM,555-987-6543,5,N,CW,0.00,0.00,0.00
2,Sunday,07/07,11:02AM,555-222-3333,12,N,,0.00,0.00,0.00
 
3,Monday,07/08,03:45PM,555-444-5555,7,N,,0.45,0.00,0.45
Subtotal - Airtime,,,,,,,,0.45,,
Total Voice,,,,,24,,,0.45,0.00,0.45
"#;

/// One account, one data sub-report. Exercises the `Msgs/KB` → `Msg/KB` and
/// `Sent/Rcvd` → `In/Out` header renames and the digits-only quantity rule.
pub const DATA_LOG: &str = r#"AT&T Wireless Services,,,,,,,,,,
,555-987-6543
Data Usage,,,,,,,,,,
Item,Day,Date,Time,To/From,Number Type,Msgs/KB,Rate Type,Feature,Charge,Sent/Rcvd
1,SAT,07/06,10:01AM,555-111-2222,Mobile,1 KB,N,TXT,0.20,Sent
2,SUN,07/07,01:15PM,555-333-4444,Mobile,3 KB,N,TXT,0.20,Rcvd
3,MON,07/08,02:00PM,555-555-6666,Mobile,"1,024 KB",N,DATA,2.00,Rcvd
Total Data,,,,,,1028,,,2.40,
"#;

/// A malformed roaming header (`Call To` at index 4, no `Number Called`
/// column). The repaired header gains a `Number Called` column and its last
/// column becomes the `Roaming` flag.
pub const ROAMING_LOG: &str = r#"AT&T Wireless Services,,,,,,,,
,555-123-4567
Roaming Usage,,,,,,,,
Item,Day,Date,Time,Call To,Min,Airtime Charge,Total Charge
1,TUE,07/09,08:30AM,555-666-7777,TORONTO ON,4,0.79,0.79
2,WED,07/10,06:05PM,555-888-9999,TORONTO ON,2,0.79,0.79
Total Roaming,,,,,,6,,1.58
"#;

/// Two banner sections, two accounts; the first account carries a voice and
/// a data sub-report back to back under one banner.
pub const MULTI_ACCOUNT_LOG: &str = r#"AT&T Wireless Services,,,,,,,,,,
Monthly Statement,,,,,,,,,,
,555-123-4567
Voice Usage,,,,,,,,,,
Item,Day,Date,Time,Number Called,Min,Rate Code,Feature,Airtime Charge,LD/Add'l Charge,Total Charge
1,Saturday,07/06,09:14AM,555-987-6543,5,N,CW,0.00,0.00,0.00
2,Sunday,07/07,11:02AM,555-222-3333,12,N,,0.00,0.00,0.00
Total Voice,,,,,17,,,0.00,0.00,0.00
Data Usage,,,,,,,,,,
Item,Day,Date,Time,To/From,Number Type,Msgs/KB,Rate Type,Feature,Charge,Sent/Rcvd
1,SAT,07/06,10:01AM,555-111-2222,Mobile,1 KB,N,TXT,0.20,Sent
2,SUN,07/07,01:15PM,555-333-4444,Mobile,3 KB,N,TXT,0.20,Rcvd
Total Data,,,,,,4,,,0.40,
AT&T Wireless Services,,,,,,,,,,
,555-987-6543
Data Usage,,,,,,,,,,
Item,Day,Date,Time,To/From,Number Type,Msgs/KB,Rate Type,Feature,Charge,Sent/Rcvd
1,MON,07/08,02:00PM,555-555-6666,Mobile,"1,024 KB",N,DATA,2.00,Rcvd
Total Data,,,,,,1028,,,2.00,
"#;

/// A data row with more cells than its header defines — a structural
/// mismatch that must fail the whole file.
pub const OVERLONG_ROW_LOG: &str = r#"AT&T Wireless Services,,,,
,555-123-4567
Item,Day,Date,Time,Number Called
1,SAT,07/06,09:14AM,555-987-6543,EXTRA
"#;

/// A header whose index-4 cell names neither record kind.
pub const UNKNOWN_HEADER_LOG: &str = r#"AT&T Wireless Services,,,,,
,555-123-4567
Item,Day,Date,Time,Strange Column,Min
1,SAT,07/06,09:14AM,x,5
"#;

/// Generate a single-account voice log with `n` entries, for throughput
/// tests and benches.
pub fn voice_log_with(n: usize) -> String {
    let mut log = String::from(
        "AT&T Wireless Services,,,,,,,,,,\n\
         ,555-123-4567\n\
         Item,Day,Date,Time,Number Called,Min,Rate Code,Feature,Airtime Charge,LD/Add'l Charge,Total Charge\n",
    );
    for i in 0..n {
        log.push_str(&format!(
            "{},{},07/{:02},0{}:00AM,555-987-65{:02},{},N,,0.0{},0.00,0.0{}\n",
            i + 1,
            ["Saturday", "Sunday", "Monday"][i % 3],
            i % 28 + 1,
            i % 9 + 1,
            i % 100,
            i % 60,
            i % 10,
            i % 10,
        ));
    }
    log.push_str("Total,,,,,0,,,0.00,0.00,0.00\n");
    log
}
