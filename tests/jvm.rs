//! Calls the JNI exports from inside an embedded JVM.
//!
//! Tests return early when no JVM can be started (no `JAVA_HOME`, no
//! `libjvm`), so the rest of the suite still runs on machines without Java.

use std::ptr;
use std::sync::OnceLock;

use jni::objects::{JIntArray, JObject, JString};
use jni::sys::{jint, jintArray, JNI_FALSE, JNI_TRUE, JNI_VERSION_1_8};
use jni::{InitArgsBuilder, JNIEnv, JNIVersion, JavaVM};

use nativecalc::api::jvm::*;
use nativecalc::sysinfo::{FALLBACK_REPORT, REPORT_CAPACITY};

fn jvm() -> Option<&'static JavaVM> {
    static JVM: OnceLock<Option<JavaVM>> = OnceLock::new();
    JVM.get_or_init(|| {
        let args = InitArgsBuilder::new()
            .version(JNIVersion::V8)
            .build()
            .ok()?;
        JavaVM::new(args).ok()
    })
    .as_ref()
}

fn with_env<F>(f: F)
where
    F: FnOnce(&mut JNIEnv<'_>),
{
    let Some(vm) = jvm() else {
        eprintln!("no JVM available, skipping");
        return;
    };
    let mut env = vm.attach_current_thread().unwrap();
    f(&mut env);
}

fn new_ints<'local>(env: &mut JNIEnv<'local>, values: &[jint]) -> JIntArray<'local> {
    let array = env.new_int_array(values.len() as i32).unwrap();
    env.set_int_array_region(&array, 0, values).unwrap();
    array
}

fn read_ints(env: &mut JNIEnv<'_>, raw: jintArray) -> Option<Vec<jint>> {
    if raw.is_null() {
        return None;
    }
    // SAFETY: a non-null jintArray local reference returned by the bridge.
    let array = unsafe { JIntArray::from_raw(raw) };
    let len = env.get_array_length(&array).unwrap();
    let mut out = vec![0; len as usize];
    env.get_int_array_region(&array, 0, &mut out).unwrap();
    Some(out)
}

/// Second handle on the same env, as the JVM would pass into an export.
fn callee<'local>(env: &JNIEnv<'local>) -> JNIEnv<'local> {
    // SAFETY: the clone only lives for the duration of one export call.
    unsafe { env.unsafe_clone() }
}

fn square<'local>(env: &mut JNIEnv<'local>, input: JIntArray<'local>) -> jintArray {
    Java_com_akfc_training_jni_NativeCalculator_processArray(callee(env), JObject::null(), input)
}

#[test]
fn on_load_reports_java_8() {
    let version = JNI_OnLoad(ptr::null_mut(), ptr::null_mut());
    assert_eq!(version, JNI_VERSION_1_8);
}

#[test]
fn process_array_squares_with_wraparound() {
    with_env(|env| {
        let input = new_ints(env, &[1, -2, 3, 65_536]);
        let raw = square(env, input);
        assert_eq!(read_ints(env, raw), Some(vec![1, 4, 9, 0]));
    });
}

#[test]
fn process_array_leaves_input_untouched() {
    with_env(|env| {
        let input = new_ints(env, &[7, -8]);
        // SAFETY: a second handle on the same live local reference.
        let again = unsafe { JIntArray::from_raw(input.as_raw()) };
        let raw = square(env, input);
        assert_eq!(read_ints(env, raw), Some(vec![49, 64]));
        assert_eq!(read_ints(env, again.into_raw()), Some(vec![7, -8]));
    });
}

#[test]
fn empty_array_gives_empty_array() {
    with_env(|env| {
        let input = new_ints(env, &[]);
        let raw = square(env, input);
        assert_eq!(read_ints(env, raw), Some(vec![]));
    });
}

#[test]
fn null_array_gives_null_without_throwing() {
    with_env(|env| {
        // SAFETY: a null reference is a valid (absent) jintArray.
        let input = unsafe { JIntArray::from_raw(ptr::null_mut()) };
        let raw = square(env, input);
        assert!(raw.is_null());
        assert!(!env.exception_check().unwrap());
    });
}

#[test]
fn system_info_is_a_java_string() {
    with_env(|env| {
        let raw =
            Java_com_akfc_training_jni_NativeCalculator_getSystemInfo(callee(env), JObject::null());
        assert!(!raw.is_null());

        // SAFETY: a non-null jstring local reference returned by the bridge.
        let text = unsafe { JString::from_raw(raw) };
        let text: String = env.get_string(&text).unwrap().into();
        assert!(text.len() < REPORT_CAPACITY);
        if text != FALLBACK_REPORT {
            for label in ["System: ", "Node: ", "Release: ", "Version: ", "Machine: "] {
                assert!(text.contains(label), "missing {label:?} in {text:?}");
            }
        }
    });
}

#[test]
fn scalar_exports() {
    with_env(|env| {
        let sum = Java_com_akfc_training_jni_NativeCalculator_add(
            callee(env),
            JObject::null(),
            i32::MAX,
            1,
        );
        assert_eq!(sum, i32::MIN);

        let product = Java_com_akfc_training_jni_NativeCalculator_multiply(
            callee(env),
            JObject::null(),
            4.5,
            2.0,
        );
        assert_eq!(product, 9.0);

        let rejected =
            Java_com_akfc_training_jni_NativeCalculator_factorial(callee(env), JObject::null(), -3);
        assert_eq!(rejected, -1);
        let wrapped =
            Java_com_akfc_training_jni_NativeCalculator_factorial(callee(env), JObject::null(), 21);
        assert_eq!(wrapped, -4_249_290_049_419_214_848);

        let two = Java_com_akfc_training_jni_NativeCalculator_isPrime(callee(env), JObject::null(), 2);
        assert_eq!(two, JNI_TRUE);
        let eighteen =
            Java_com_akfc_training_jni_NativeCalculator_isPrime(callee(env), JObject::null(), 18);
        assert_eq!(eighteen, JNI_FALSE);
    });
}
