#![no_main]

use arbitrary::Arbitrary;
use bytes::Bytes;
use commonware_tl::{
    decode_cfg, decode_registered_cfg, object, AnyObject, Config, RangeCfg, Registry,
};
use libfuzzer_sys::fuzz_target;

object! {
    pub struct Photo = 0x9ef4a3b2 {
        #[flag(0)]
        pub caption: Option<String>,
        #[bitflag(1)]
        pub spoiler: bool,
        pub id: i64,
        pub sizes: Vec<u32>,
        pub data: Bytes,
    }
}

object! {
    pub struct Location = 0x48b3c1d7 {
        pub lat: f64,
        pub long: f64,
    }
}

object! {
    pub struct MediaEmpty = 0x3ded6320 {}
}

object! {
    pub struct Post = 0x5bb8e511 {
        #[flag(3)]
        pub reply_to: Option<Box<Post>>,
        #[bitflag(4)]
        pub pinned: bool,
        pub media: AnyObject,
        pub attachments: Vec<AnyObject>,
        pub tags: Vec<String>,
        pub edited: bool,
    }
}

#[derive(Arbitrary, Debug)]
enum Target {
    Registered,
    Post,
    Photos,
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    target: Target,
    max_depth: u8,
    max_len: u16,
    data: Vec<u8>,
}

fn registry() -> Registry {
    Registry::builder()
        .register::<Photo>()
        .and_then(|b| b.register::<Location>())
        .and_then(|b| b.register::<Post>())
        .and_then(|b| b.register_enum::<MediaEmpty>())
        .expect("registry")
        .build()
}

fn fuzz(input: FuzzInput) {
    let registry = registry();
    let cfg = Config {
        max_depth: input.max_depth as usize,
        vector_len: RangeCfg::from(..=input.max_len as usize),
        bytes_len: RangeCfg::from(..=input.max_len as usize),
    };
    let buf = Bytes::from(input.data);

    match input.target {
        Target::Registered => {
            if let Ok(object) = decode_registered_cfg(&registry, &cfg, buf) {
                assert!(registry.contains(object.type_code()));
            }
        }
        Target::Post => {
            let mut post = Post::default();
            let _ = decode_cfg(&registry, &cfg, buf, &mut post);
        }
        Target::Photos => {
            let mut photos = Vec::<Photo>::new();
            if decode_cfg(&registry, &cfg, buf, &mut photos).is_ok() {
                assert!(photos.len() <= input.max_len as usize);
            }
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
