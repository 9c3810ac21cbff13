//! Small frequency and bigram dictionaries for tests.
use crate::dictionary::DictionaryBuilder;
use crate::speller::{SymSpell, SymSpellConfig};

/// `term count`, a cut of an English frequency list.
pub const ENGLISH: &str = "\
the 23135851162
of 13151942776
and 12997637966
to 12136980858
a 9081174698
in 8469404971
for 5933321709
is 4705743816
on 3750423199
that 3400031103
by 3350048871
this 3228469771
with 3183110675
i 3086225277
you 2996181025
it 2813163874
not 2633487141
or 2590739907
be 2398724162
are 2393614870
from 2275595356
at 2272272772
as 2247431740
your 2062066547
all 2022459848
have 1564202750
new 1551258643
more 1544771673
an 1518266373
was 1483428678
we 1390661912
will 1356293641
home 1276852170
can 1242323499
us 1229112622
about 1226734006
if 1134987907
my 1059793441
has 1046319984
but 999390194
our 998630063
one 993268717
other 978481319
do 950751722
no 937112320
time 908705570
they 883223816
he 842847219
up 829969374
may 827822032
what 812395582
which 810514085
their 782849411
out 741601852
use 719980257
any 711404497
there 701170205
see 681097067
only 680536803
so 661839318
his 660177731
when 650462962
here 639711198
who 630604408
also 616361031
now 611961055
get 605222342
first 578161543
been 576616452
would 572644147
how 571848080
were 570699558
me 566617666
some 548829454
these 541003982
its 525627757
like 520585287
than 502609275
had 477104353
into 426353003
him 422436240
year 419873736
take 396826487
day 392632891
two 390744654
where 385993587
over 377302128
back 361045373
know 340382787
read 329669539
last 319806434
much 306981573
part 293413082
well 279512542
plan 252287136
play 246993201
good 218011405
film 200117209
past 198223470
head 177562004
third 160003474
quarter 118398711
summer 110427347
players 99327592
message 96618103
secret 79734213
learned 66013441
strong 64855213
slate 58218219
love 55813432
grade 54372321
fun 54241219
plenty 36224017
useful 34564117
biggest 34222138
despite 32546521
spelling 27484019
mistakes 16632871
dated 15373932
intermediate 14922931
inspired 13781282
sixth 12922351
couldn't 11302122
horrible 9130981
quick 42153924
brown 32136192
fox 37562811
jumps 7271021
lazy 5437411
dog 72412981
own 201322422
row 27122341
brow 1522211
jump 15812342
lay 33212341
tie 18532111
toe 9722122
abolition 4312983
ambition 22123412
knew 62342115
known 102312345
knows 22324543
spewing 221343
sperling 113241
quit 21321421
quite 91321335
quilt 4123412
live 142132342
lose 89213123
hate 12312342
ha 3211212
he'd 3123123
hat 22312434
bright 22123412
cold 45213421
april 61234123
clocks 2312312
striking 7123123
thirteen 4123412
";

/// `first second count`
pub const BIGRAMS: &str = "\
where is 2405
is the 94612823
the love 1351
love he 5123
he had 3112334
had dated 2311
for much 351234
much of 2923452
of the 8223123
the past 2123123
past who 3123
who couldn't 4512
couldn't read 61234
read in 412123
in sixth 121234
sixth grade 312312
grade and 12312
and inspired 4123
inspired him 12312
in the 6123123
the third 312312
third quarter 41234
quarter of 123123
of last 123123
last year 3123123
year he 123123
had learned 61234
learned of 12321
of a 3412312
a secret 52312
secret plan 12341
the biggest 512312
biggest players 21234
players in 21234
the strong 31234
strong summer 3123
summer film 2123
film slate 1123
slate with 1423
with plenty 61234
plenty of 623123
of fun 41234
can you 2123123
you read 123123
read this 123123
this message 512312
message despite 1231
despite the 812312
the horrible 12312
horrible spelling 1123
spelling mistakes 21234
";

pub fn english() -> SymSpell {
    let mut builder = DictionaryBuilder::new(SymSpellConfig::default()).unwrap();
    builder.load_dictionary(ENGLISH.lines(), 0, 1);
    builder.load_bigram_dictionary(BIGRAMS.lines(), 0, 2);
    builder.build()
}

pub fn speller(entries: &str) -> SymSpell {
    let mut builder = DictionaryBuilder::new(SymSpellConfig::default()).unwrap();
    builder.load_dictionary(entries.lines(), 0, 1);
    builder.build()
}
