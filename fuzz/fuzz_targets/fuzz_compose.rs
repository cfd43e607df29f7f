#![no_main]

use libfuzzer_sys::fuzz_target;

use ventus_notify::compose_notification;

// Fuzz message composition with arbitrary template and name bytes.
// Composition must never panic, and a template without the placeholder
// must pass through untouched.
fuzz_target!(|data: &[u8]| {
    let (template_bytes, name_bytes) = match data.iter().position(|&b| b == 0xFF) {
        Some(split) => (&data[..split], &data[split + 1..]),
        None => (data, &[][..]),
    };

    let template = String::from_utf8_lossy(template_bytes);
    let name = String::from_utf8_lossy(name_bytes);

    let composed = compose_notification(Some(&template), Some(&name));
    if !template.contains("{username}") {
        assert_eq!(composed, template);
    }

    let fallback = compose_notification(None, None);
    assert!(fallback.starts_with("Your friend"));

    // These must never panic
    let _ = compose_notification(None, Some(&name));
    let _ = compose_notification(Some(&template), None);
});
