// fixtures.rs — provides commonly used status bodies and canned responses

use dcnow::test_support;

/// Mixed active/idle games with a short code on the first entry.
pub fn sample_body() -> &'static str {
    test_support::sample_status_body()
}

/// A body with `n` one-player games named `g0..g{n-1}`.
pub fn body_with_games(n: usize) -> String {
    let mut body = String::from(r#"{"total_players":0,"games":["#);
    for i in 0..n {
        if i > 0 {
            body.push(',');
        }
        body.push_str(&format!(r#"{{"name":"g{}","players":1}}"#, i));
    }
    body.push_str("]}");
    body
}

/// The sample body wrapped in a complete 200 response.
pub fn sample_response() -> Vec<u8> {
    test_support::ok_response(sample_body())
}

/// A response whose body uses generous whitespace and newlines.
pub fn airy_response() -> Vec<u8> {
    test_support::ok_response(
        "{\r\n  \"total_players\" : 4 ,\r\n  \"games\" : [\r\n    { \"name\" : \"Alien Front Online\" , \"players\" : 4 }\r\n  ]\r\n}",
    )
}
